//! Student dashboard: enrolled subjects with leave-with-confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route for students. Lists `GET /api/student/my-subjects`; leaving
//! a subject asks for confirmation, reports the outcome as a toast, and
//! reloads the list.

use leptos::prelude::*;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::components::subject_card::SubjectCard;
use crate::net::api;
use crate::net::types::Subject;
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::state::toast::ToastState;
use crate::state::view::ViewState;
use crate::util::request::{install_loader, run_action};

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let subjects = RwSignal::new(ViewState::<Vec<Subject>>::default());
    let leaving = RwSignal::new(None::<i64>);
    let leave_busy = RwSignal::new(FormState::default());

    install_loader(auth, subjects, "Failed to load subjects", || Some(()), |token, ()| async move {
        api::list_enrolled_subjects(&token).await
    });

    let on_leave_cancel = Callback::new(move |()| leaving.set(None));
    let on_leave_confirm = Callback::new(move |()| {
        let Some(id) = leaving.get_untracked() else {
            return;
        };
        run_action(
            auth,
            leave_busy,
            toasts,
            "Successfully left the subject",
            "Failed to leave subject",
            move |token| async move { api::leave(&token, id).await },
            move |()| subjects.update(ViewState::invalidate),
        );
        leaving.set(None);
    });

    view! {
        <NavBar/>
        <main class="page">
            <div class="page__header">
                <div>
                    <h2 class="page__title">"My Subjects"</h2>
                    <p class="page__subtitle">"Subjects you are enrolled in"</p>
                </div>
                <a class="btn btn--primary" href="/student/subjects/browse">"+ Browse Subjects"</a>
            </div>

            <ErrorBanner message=Signal::derive(move || subjects.with(|v| v.error.clone()))/>
            <Show
                when=move || !subjects.with(|v| v.loading)
                fallback=|| view! { <div class="page-loading">"Loading..."</div> }
            >
                {move || {
                    let list = subjects.with(|v| v.data.clone().unwrap_or_default());
                    if list.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <p>"You are not enrolled in any subjects yet."</p>
                                <a class="btn btn--primary" href="/student/subjects/browse">
                                    "Browse Available Subjects"
                                </a>
                            </div>
                        }
                            .into_any();
                    }
                    view! {
                        <div class="card-grid">
                            {list
                                .into_iter()
                                .map(|subject| {
                                    let id = subject.id;
                                    let href = format!("/student/subjects/{id}");
                                    view! {
                                        <SubjectCard subject=subject>
                                            <a class="btn btn--primary" href=href>"View Tasks"</a>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| leaving.set(Some(id))
                                            >
                                                "Leave"
                                            </button>
                                        </SubjectCard>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </Show>
        </main>

        <ConfirmModal
            open=Signal::derive(move || leaving.get().is_some())
            title="Leave Subject"
            message="Are you sure you want to leave this subject? You can re-enroll later if needed."
            busy=Signal::derive(move || leave_busy.with(|f| f.submitting))
            on_confirm=on_leave_confirm
            on_cancel=on_leave_cancel
        />
    }
}
