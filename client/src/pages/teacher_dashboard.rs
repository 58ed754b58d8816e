//! Teacher dashboard: own subjects and the create-subject form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route for teachers. Lists `GET /api/teacher/subjects` and refreshes
//! the list after a subject is created.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::components::subject_card::SubjectCard;
use crate::net::api;
use crate::net::types::Subject;
use crate::pages::forms::SubjectForm;
use crate::state::auth::AuthState;
use crate::state::view::ViewState;
use crate::util::request::install_loader;

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let subjects = RwSignal::new(ViewState::<Vec<Subject>>::default());
    let show_create = RwSignal::new(false);

    install_loader(auth, subjects, "Failed to load subjects", || Some(()), |token, ()| async move {
        api::list_teacher_subjects(&token).await
    });

    let on_saved = Callback::new(move |_: Subject| subjects.update(ViewState::invalidate));
    let on_close = Callback::new(move |()| show_create.set(false));

    view! {
        <NavBar/>
        <main class="page">
            <div class="page__header">
                <div>
                    <h2 class="page__title">"My Subjects"</h2>
                    <p class="page__subtitle">"Manage your courses and assignments"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ Create New Subject"
                </button>
            </div>

            <Show when=move || show_create.get()>
                <SubjectForm on_saved=on_saved on_close=on_close/>
            </Show>

            <ErrorBanner message=Signal::derive(move || subjects.with(|v| v.error.clone()))/>
            <Show
                when=move || !subjects.with(|v| v.loading)
                fallback=|| view! { <div class="page-loading">"Loading..."</div> }
            >
                {move || {
                    let list = subjects.with(|v| v.data.clone().unwrap_or_default());
                    if list.is_empty() {
                        return view! {
                            <div class="empty-state">"No subjects yet. Create your first subject!"</div>
                        }
                            .into_any();
                    }
                    view! {
                        <div class="card-grid">
                            {list
                                .into_iter()
                                .map(|subject| {
                                    let href = format!("/teacher/subjects/{}", subject.id);
                                    view! {
                                        <SubjectCard subject=subject>
                                            <a class="btn btn--primary btn--block" href=href>
                                                "View Details"
                                            </a>
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
    }
}
