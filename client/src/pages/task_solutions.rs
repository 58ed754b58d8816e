//! Teacher task detail: statistics, task editing, and solution grading.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/teacher/tasks/:id`. Grading a solution refreshes both the solution list
//! and the statistics header since `evaluated_solutions` changes with it.

#[cfg(test)]
#[path = "task_solutions_test.rs"]
mod task_solutions_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::{Solution, Task, TaskWithStats};
use crate::pages::forms::TaskForm;
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::state::view::ViewState;
use crate::util::format::{evaluated_label, format_optional_timestamp, grading_progress};
use crate::util::membership::parse_id;
use crate::util::request::{install_loader, run_mutation};
use crate::util::validate::grade_points;

fn initial_grade(solution: &Solution) -> String {
    solution.points_earned.unwrap_or(0).to_string()
}

fn points_hint(max_points: Option<i64>) -> String {
    max_points.map_or_else(|| "Points".to_owned(), |max| format!("Points (0-{max})"))
}

#[component]
pub fn TaskSolutionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let task_id = Memo::new(move |_| parse_id(params.with(|p| p.get("id"))));

    let stats = RwSignal::new(ViewState::<TaskWithStats>::default());
    let solutions = RwSignal::new(ViewState::<Vec<Solution>>::default());
    let editing = RwSignal::new(false);

    install_loader(auth, stats, "Failed to load task", move || task_id.get(), |token, id| async move {
        api::fetch_task_with_stats(&token, id).await
    });
    install_loader(auth, solutions, "Failed to load solutions", move || task_id.get(), |token, id| async move {
        api::list_task_solutions(&token, id).await
    });

    let on_task_saved = Callback::new(move |_: Task| stats.update(ViewState::invalidate));
    let on_edit_close = Callback::new(move |()| editing.set(false));
    let on_evaluated = Callback::new(move |()| {
        solutions.update(ViewState::invalidate);
        stats.update(ViewState::invalidate);
    });

    let back_href = move || {
        stats.with(|v| v.data.as_ref().map(|s| format!("/teacher/subjects/{}", s.task.subject_id)))
    };
    let max_points = move || stats.with(|v| v.data.as_ref().map(|s| s.task.points));

    view! {
        {move || match back_href() {
            Some(href) => view! { <NavBar back_href=href back_label="← Back to Subject"/> }.into_any(),
            None => view! { <NavBar back_href="/teacher" back_label="← Back to Dashboard"/> }.into_any(),
        }}
        <main class="page">
            <ErrorBanner message=Signal::derive(move || stats.with(|v| v.error.clone()))/>
            <Show
                when=move || !stats.with(|v| v.loading)
                fallback=|| view! { <div class="page-loading">"Loading..."</div> }
            >
                {move || {
                    let Some(info) = stats.with(|v| v.data.clone()) else {
                        return view! { <div class="empty-state">"Task not found"</div> }.into_any();
                    };
                    task_header(info, editing, on_task_saved, on_edit_close).into_any()
                }}
            </Show>

            <section class="panel">
                <h3 class="panel__title">"Submitted Solutions"</h3>
                <ErrorBanner message=Signal::derive(move || solutions.with(|v| v.error.clone()))/>
                {move || {
                    let list = solutions.with(|v| v.data.clone().unwrap_or_default());
                    if list.is_empty() {
                        return view! { <p class="empty-state">"No solutions submitted yet."</p> }.into_any();
                    }
                    let max = max_points();
                    view! {
                        <div class="solution-list">
                            {list
                                .into_iter()
                                .map(|solution| {
                                    view! { <SolutionCard solution=solution max_points=max on_evaluated=on_evaluated/> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </section>
        </main>
    }
}

fn task_header(
    info: TaskWithStats,
    editing: RwSignal<bool>,
    on_saved: Callback<Task>,
    on_close: Callback<()>,
) -> impl IntoView {
    let TaskWithStats { task, total_solutions, evaluated_solutions } = info;
    let edit_task = task.clone();
    let subject_id = task.subject_id;

    view! {
        <section class="panel">
            <div class="panel__header">
                <div>
                    <h2 class="page__title">{task.name}</h2>
                    <p class="task-row__points">{format!("Max Points: {}", task.points)}</p>
                </div>
                <button class="btn btn--secondary" on:click=move |_| editing.set(true)>"Edit Task"</button>
            </div>
            <p class="panel__description">{task.description}</p>
            <dl class="facts">
                <dt>"Total Solutions"</dt>
                <dd>{total_solutions}</dd>
                <dt>"Evaluated"</dt>
                <dd>{grading_progress(evaluated_solutions, total_solutions)}</dd>
                <dt>"Created"</dt>
                <dd>{format_optional_timestamp(task.created_at.as_deref())}</dd>
            </dl>
        </section>
        <Show when=move || editing.get()>
            <TaskForm subject_id=subject_id existing=edit_task.clone() on_saved=on_saved on_close=on_close/>
        </Show>
    }
}

#[component]
fn SolutionCard(solution: Solution, max_points: Option<i64>, on_evaluated: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let show_evaluate = RwSignal::new(false);
    let points = RwSignal::new(initial_grade(&solution));
    let form = RwSignal::new(FormState::default());
    let solution_id = solution.id;
    let evaluated = solution.points_earned;

    let on_evaluate = move |_: leptos::ev::MouseEvent| {
        let points_earned = match grade_points(&points.get(), max_points) {
            Ok(value) => value,
            Err(message) => {
                form.update(|f| f.reject(message));
                return;
            }
        };
        run_mutation(
            auth,
            form,
            "Failed to evaluate",
            move |token| async move { api::evaluate_solution(&token, solution_id, points_earned).await },
            move |_| {
                show_evaluate.set(false);
                on_evaluated.run(());
            },
        );
    };

    view! {
        <div class="solution-card">
            <div class="solution-card__header">
                <div>
                    <p class="solution-card__student">{format!("Student ID: {}", solution.student_id)}</p>
                    <p class="solution-card__meta">
                        {format!("Submitted: {}", format_optional_timestamp(solution.submitted_at.as_deref()))}
                    </p>
                    {evaluated.map(|earned| view! { <p class="solution-card__grade">{evaluated_label(earned, max_points)}</p> })}
                </div>
                {match evaluated {
                    None => view! {
                        <button class="btn btn--primary" on:click=move |_| show_evaluate.update(|open| *open = !*open)>
                            "Evaluate"
                        </button>
                    }
                        .into_any(),
                    Some(_) => view! { <span class="badge badge--success">"✓ Evaluated"</span> }.into_any(),
                }}
            </div>
            <pre class="solution-card__content">{solution.content}</pre>
            <Show when=move || show_evaluate.get() && evaluated.is_none()>
                <div class="grade-form">
                    <ErrorBanner message=Signal::derive(move || form.with(|f| f.error.clone()))/>
                    <label class="form__label">
                        {points_hint(max_points)}
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            max=max_points.map(|max| max.to_string())
                            prop:value=move || points.get()
                            on:input=move |ev| points.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form__actions">
                        <button class="btn btn--primary" disabled=move || form.with(|f| f.submitting) on:click=on_evaluate>
                            {move || if form.with(|f| f.submitting) { "Saving..." } else { "Submit Evaluation" }}
                        </button>
                        <button class="btn btn--secondary" on:click=move |_| show_evaluate.set(false)>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
