//! Student view of one enrolled subject and its tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/student/subjects/:id`. There is no student subject-detail endpoint, so
//! the subject is looked up in the enrolled list; a subject the student is
//! not enrolled in renders "Subject not found".

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::{Subject, Task};
use crate::state::auth::AuthState;
use crate::state::view::ViewState;
use crate::util::membership::{find_subject, parse_id};
use crate::util::request::install_loader;

#[component]
pub fn StudentSubjectDetailsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let subject_id = Memo::new(move |_| parse_id(params.with(|p| p.get("id"))));

    let enrolled = RwSignal::new(ViewState::<Vec<Subject>>::default());
    let tasks = RwSignal::new(ViewState::<Vec<Task>>::default());

    install_loader(auth, enrolled, "Failed to load subject", || Some(()), |token, ()| async move {
        api::list_enrolled_subjects(&token).await
    });
    install_loader(auth, tasks, "Failed to load tasks", move || subject_id.get(), |token, id| async move {
        api::list_student_tasks(&token, id).await
    });

    let subject = move || {
        let id = subject_id.get()?;
        enrolled.with(|v| v.data.as_deref().and_then(|list| find_subject(list, id).cloned()))
    };

    view! {
        <NavBar back_href="/student" back_label="← Back to Dashboard"/>
        <main class="page">
            <ErrorBanner message=Signal::derive(move || enrolled.with(|v| v.error.clone()))/>
            <Show
                when=move || !enrolled.with(|v| v.loading)
                fallback=|| view! { <div class="page-loading">"Loading..."</div> }
            >
                {move || match subject() {
                    None => view! { <div class="empty-state">"Subject not found"</div> }.into_any(),
                    Some(subject) => view! {
                        <section class="panel">
                            <h2 class="page__title">{subject.name}</h2>
                            <p class="subject-code">{subject.code}</p>
                            <p class="subject-card__credits">{format!("Credits: {}", subject.credits)}</p>
                            {subject.description.map(|text| view! { <p class="panel__description">{text}</p> })}
                        </section>
                        <section class="panel">
                            <h3 class="panel__title">"Tasks"</h3>
                            <ErrorBanner message=Signal::derive(move || tasks.with(|v| v.error.clone()))/>
                            {move || task_list(tasks.with(|v| v.data.clone().unwrap_or_default()))}
                        </section>
                    }
                        .into_any(),
                }}
            </Show>
        </main>
    }
}

fn task_list(list: Vec<Task>) -> AnyView {
    if list.is_empty() {
        return view! { <p class="empty-state">"No tasks assigned yet."</p> }.into_any();
    }
    view! {
        <div class="task-list">
            {list
                .into_iter()
                .map(|task| {
                    let href = format!("/student/tasks/{}", task.id);
                    view! {
                        <div class="task-row">
                            <div class="task-row__main">
                                <h4 class="task-row__name">{task.name}</h4>
                                <p class="task-row__description">{task.description}</p>
                                <p class="task-row__points">{format!("Max Points: {}", task.points)}</p>
                            </div>
                            <a class="btn btn--primary" href=href>"Submit Solution"</a>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
        .into_any()
}
