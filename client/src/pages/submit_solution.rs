//! Solution submission for one task plus the student's earlier attempts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/student/tasks/:id`. Submissions are append-only; each successful submit
//! clears the editor, shows a toast, and reloads the attempt list.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::Solution;
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::view::ViewState;
use crate::util::format::{format_optional_timestamp, score_label};
use crate::util::membership::parse_id;
use crate::util::notify::notify;
use crate::util::request::{install_loader, run_mutation};
use crate::util::validate::solution_content;

#[component]
pub fn SubmitSolutionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let task_id = Memo::new(move |_| parse_id(params.with(|p| p.get("id"))));

    let solutions = RwSignal::new(ViewState::<Vec<Solution>>::default());
    let content = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    install_loader(auth, solutions, "Failed to load solutions", move || task_id.get(), |token, id| async move {
        api::list_my_solutions(&token, id).await
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = task_id.get_untracked() else {
            return;
        };
        let body = match solution_content(&content.get()) {
            Ok(body) => body,
            Err(message) => {
                form.update(|f| f.reject(message));
                return;
            }
        };
        run_mutation(
            auth,
            form,
            "Failed to submit solution",
            move |token| async move { api::submit_solution(&token, id, &body).await },
            move |_| {
                content.set(String::new());
                solutions.update(ViewState::invalidate);
                notify(toasts, ToastKind::Success, "Solution submitted successfully!");
            },
        );
    };

    let heading = move || task_id.get().map_or_else(|| "Task".to_owned(), |id| format!("Task #{id}"));

    view! {
        <NavBar back_href="/student" back_label="← Back to Dashboard"/>
        <main class="page">
            <section class="panel">
                <h2 class="page__title">{heading}</h2>
                <h3 class="panel__title">"Submit Your Solution"</h3>
                <ErrorBanner message=Signal::derive(move || form.with(|f| f.error.clone()))/>
                <form class="form" on:submit=on_submit>
                    <textarea
                        class="form__input form__input--code"
                        rows="10"
                        placeholder="Write your solution here..."
                        required
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.submitting)>
                        {move || if form.with(|f| f.submitting) { "Submitting..." } else { "Submit Solution" }}
                    </button>
                </form>
            </section>

            <section class="panel">
                <h3 class="panel__title">"My Previous Submissions"</h3>
                <ErrorBanner message=Signal::derive(move || solutions.with(|v| v.error.clone()))/>
                <Show
                    when=move || !solutions.with(|v| v.loading)
                    fallback=|| view! { <div class="page-loading">"Loading..."</div> }
                >
                    {move || {
                        let list = solutions.with(|v| v.data.clone().unwrap_or_default());
                        if list.is_empty() {
                            return view! { <p class="empty-state">"No submissions yet."</p> }.into_any();
                        }
                        view! {
                            <div class="solution-list">
                                {list.into_iter().map(previous_attempt).collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }}
                </Show>
            </section>
        </main>
    }
}

fn previous_attempt(solution: Solution) -> impl IntoView {
    let badge_class = if solution.is_evaluated() { "badge badge--success" } else { "badge badge--pending" };
    view! {
        <div class="solution-card">
            <div class="solution-card__header">
                <p class="solution-card__meta">
                    {format!("Submitted: {}", format_optional_timestamp(solution.submitted_at.as_deref()))}
                </p>
                <span class=badge_class>{score_label(solution.points_earned)}</span>
            </div>
            <pre class="solution-card__content">{solution.content}</pre>
        </div>
    }
}
