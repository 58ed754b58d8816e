//! Student subject catalogue with enroll actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/student/subjects/browse`. Fetches every subject and the student's own
//! enrollments; membership decides between "Enroll" and "Already Enrolled".
//! Each Enroll button carries its own in-flight flag.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::components::subject_card::SubjectCard;
use crate::net::api;
use crate::net::types::Subject;
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::state::toast::ToastState;
use crate::state::view::ViewState;
use crate::util::membership::enrolled_ids;
use crate::util::request::{install_loader, run_action};

#[component]
pub fn BrowseSubjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let all = RwSignal::new(ViewState::<Vec<Subject>>::default());
    let mine = RwSignal::new(ViewState::<Vec<Subject>>::default());

    install_loader(auth, all, "Failed to load subjects", || Some(()), |token, ()| async move {
        api::list_all_subjects(&token).await
    });
    install_loader(auth, mine, "Failed to load subjects", || Some(()), |token, ()| async move {
        api::list_enrolled_subjects(&token).await
    });

    let enrolled = Memo::new(move |_| mine.with(|v| enrolled_ids(v.data.as_deref().unwrap_or_default())));

    let on_enrolled = Callback::new(move |()| mine.update(ViewState::invalidate));

    let loading = move || all.with(|v| v.loading) || mine.with(|v| v.loading);

    view! {
        <NavBar back_href="/student" back_label="← Back to Dashboard"/>
        <main class="page">
            <div class="page__header">
                <div>
                    <h2 class="page__title">"Browse Subjects"</h2>
                    <p class="page__subtitle">"Enroll in the subjects you want to take"</p>
                </div>
            </div>
            <ErrorBanner message=Signal::derive(move || all.with(|v| v.error.clone()).or_else(|| mine.with(|v| v.error.clone())))/>
            <Show when=move || !loading() fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
                {move || {
                    let list = all.with(|v| v.data.clone().unwrap_or_default());
                    if list.is_empty() {
                        return view! { <div class="empty-state">"No subjects available yet."</div> }.into_any();
                    }
                    let ids: HashSet<i64> = enrolled.get();
                    view! {
                        <div class="card-grid">
                            {list
                                .into_iter()
                                .map(|subject| {
                                    let id = subject.id;
                                    let action = if ids.contains(&id) {
                                        view! { <button class="btn btn--muted btn--block" disabled>"Already Enrolled"</button> }
                                            .into_any()
                                    } else {
                                        view! { <EnrollButton subject_id=id on_enrolled=on_enrolled/> }.into_any()
                                    };
                                    view! { <SubjectCard subject=subject>{action}</SubjectCard> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </Show>
        </main>
    }
}

#[component]
fn EnrollButton(subject_id: i64, on_enrolled: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let busy = RwSignal::new(FormState::default());

    let enroll = move |_: leptos::ev::MouseEvent| {
        run_action(
            auth,
            busy,
            toasts,
            "Successfully enrolled in subject!",
            "Failed to enroll",
            move |token| async move { api::enroll(&token, subject_id).await },
            move |()| on_enrolled.run(()),
        );
    };

    view! {
        <button class="btn btn--success btn--block" disabled=move || busy.with(|f| f.submitting) on:click=enroll>
            {move || if busy.with(|f| f.submitting) { "Enrolling..." } else { "Enroll" }}
        </button>
    }
}
