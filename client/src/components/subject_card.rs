//! Card for a subject in dashboard and browse grids.
//!
//! DESIGN
//! ======
//! Keeps subject presentation consistent across teacher and student lists;
//! each list supplies its own action buttons as children.

use leptos::prelude::*;

use crate::net::types::Subject;

#[component]
pub fn SubjectCard(subject: Subject, children: Children) -> impl IntoView {
    let description = subject.description.unwrap_or_default();
    view! {
        <div class="subject-card">
            <div class="subject-card__header">
                <h3 class="subject-card__name">{subject.name}</h3>
                <p class="subject-card__code">{subject.code}</p>
            </div>
            <div class="subject-card__body">
                <p class="subject-card__description">{description}</p>
                <p class="subject-card__credits">
                    "Credits: " <span class="subject-card__credits-value">{subject.credits}</span>
                </p>
                <div class="subject-card__actions">{children()}</div>
            </div>
        </div>
    }
}
