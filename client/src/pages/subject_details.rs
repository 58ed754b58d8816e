//! Teacher subject detail: info, edit/delete, enrolled students, tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/teacher/subjects/:id`. Two independent fetches (subject with students,
//! and its tasks) so a task change only reloads the task list. Deleting the
//! subject is confirmed first and returns to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_modal::ConfirmModal;
use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::{Subject, SubjectDetail, Task};
use crate::pages::forms::{SubjectForm, TaskForm};
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::state::toast::ToastState;
use crate::state::view::ViewState;
use crate::util::format::format_optional_timestamp;
use crate::util::membership::parse_id;
use crate::util::request::{install_loader, run_action};

#[component]
pub fn SubjectDetailsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let subject_id = Memo::new(move |_| parse_id(params.with(|p| p.get("id"))));

    let detail = RwSignal::new(ViewState::<SubjectDetail>::default());
    let tasks = RwSignal::new(ViewState::<Vec<Task>>::default());
    let editing = RwSignal::new(false);
    let show_task_form = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let delete_busy = RwSignal::new(FormState::default());
    let deleted = RwSignal::new(false);

    install_loader(auth, detail, "Failed to load subject", move || subject_id.get(), |token, id| async move {
        api::fetch_teacher_subject(&token, id).await
    });
    install_loader(auth, tasks, "Failed to load tasks", move || subject_id.get(), |token, id| async move {
        api::list_teacher_tasks(&token, id).await
    });

    Effect::new(move || {
        if deleted.get() {
            navigate("/teacher", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_subject_saved = Callback::new(move |_: Subject| detail.update(ViewState::invalidate));
    let on_edit_close = Callback::new(move |()| editing.set(false));
    let on_task_saved = Callback::new(move |_: Task| tasks.update(ViewState::invalidate));
    let on_task_form_close = Callback::new(move |()| show_task_form.set(false));
    let on_delete_cancel = Callback::new(move |()| confirm_delete.set(false));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = subject_id.get_untracked() else {
            return;
        };
        run_action(
            auth,
            delete_busy,
            toasts,
            "Subject deleted",
            "Failed to delete subject",
            move |token| async move { api::delete_subject(&token, id).await },
            move |()| {
                confirm_delete.set(false);
                deleted.set(true);
            },
        );
    });

    view! {
        <NavBar back_href="/teacher" back_label="← Back to Dashboard"/>
        <main class="page">
            <ErrorBanner message=Signal::derive(move || detail.with(|v| v.error.clone()))/>
            <Show
                when=move || !detail.with(|v| v.loading)
                fallback=|| view! { <div class="page-loading">"Loading..."</div> }
            >
                {move || {
                    let Some(info) = detail.with(|v| v.data.clone()) else {
                        return view! { <div class="empty-state">"Subject not found"</div> }.into_any();
                    };
                    subject_info(info, editing, confirm_delete, on_subject_saved, on_edit_close).into_any()
                }}
            </Show>

            <section class="panel">
                <div class="panel__header">
                    <h3 class="panel__title">"Tasks"</h3>
                    <button class="btn btn--primary" on:click=move |_| show_task_form.set(true)>
                        "+ Create New Task"
                    </button>
                </div>
                {move || {
                    let id = subject_id.get()?;
                    show_task_form
                        .get()
                        .then(|| view! { <TaskForm subject_id=id on_saved=on_task_saved on_close=on_task_form_close/> })
                }}
                <ErrorBanner message=Signal::derive(move || tasks.with(|v| v.error.clone()))/>
                {move || {
                    let list = tasks.with(|v| v.data.clone().unwrap_or_default());
                    if list.is_empty() {
                        return view! { <p class="empty-state">"No tasks yet. Create the first task!"</p> }.into_any();
                    }
                    view! {
                        <div class="task-list">
                            {list.into_iter().map(teacher_task_row).collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </section>
        </main>

        <ConfirmModal
            open=confirm_delete
            title="Delete Subject"
            message="Are you sure you want to delete this subject? Students will no longer see it."
            busy=Signal::derive(move || delete_busy.with(|f| f.submitting))
            on_confirm=on_delete_confirm
            on_cancel=on_delete_cancel
        />
    }
}

fn subject_info(
    info: SubjectDetail,
    editing: RwSignal<bool>,
    confirm_delete: RwSignal<bool>,
    on_saved: Callback<Subject>,
    on_close: Callback<()>,
) -> impl IntoView {
    let SubjectDetail { subject, students } = info;
    let edit_subject = subject.clone();
    let student_count = students.len();
    let description = subject.description.clone();

    view! {
        <section class="panel">
            <div class="panel__header">
                <div>
                    <h2 class="page__title">{subject.name.clone()}</h2>
                    <p class="subject-code">{subject.code.clone()}</p>
                </div>
                <div class="panel__actions">
                    <button class="btn btn--secondary" on:click=move |_| editing.set(true)>"Edit"</button>
                    <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>"Delete"</button>
                </div>
            </div>
            <dl class="facts">
                <dt>"Credits"</dt>
                <dd>{subject.credits}</dd>
                <dt>"Enrolled Students"</dt>
                <dd>{student_count}</dd>
                <dt>"Created"</dt>
                <dd>{format_optional_timestamp(subject.created_at.as_deref())}</dd>
            </dl>
            {description.map(|text| view! { <p class="panel__description">{text}</p> })}
        </section>

        <Show when=move || editing.get()>
            <SubjectForm existing=edit_subject.clone() on_saved=on_saved on_close=on_close/>
        </Show>

        <section class="panel">
            <h3 class="panel__title">{format!("Enrolled Students ({student_count})")}</h3>
            {if students.is_empty() {
                view! { <p class="empty-state">"No students enrolled yet."</p> }.into_any()
            } else {
                view! {
                    <ul class="student-list">
                        {students
                            .into_iter()
                            .map(|student| {
                                view! {
                                    <li class="student-list__item">
                                        <span class="student-list__name">{student.username}</span>
                                        <span class="student-list__email">{student.email}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}

fn teacher_task_row(task: Task) -> impl IntoView {
    let href = format!("/teacher/tasks/{}", task.id);
    view! {
        <div class="task-row">
            <div class="task-row__main">
                <h4 class="task-row__name">{task.name}</h4>
                <p class="task-row__description">{task.description}</p>
                <p class="task-row__points">{format!("Max Points: {}", task.points)}</p>
            </div>
            <a class="btn btn--primary" href=href>"View Solutions"</a>
        </div>
    }
}
