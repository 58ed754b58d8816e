//! Create/edit forms for subjects and tasks.
//!
//! DESIGN
//! ======
//! One component per entity serves both create and edit; passing `existing`
//! switches the request to the update endpoint and pre-fills the fields.
//! Inputs are kept as raw strings and parsed by `util::validate` on submit so
//! a rejected value stays on screen for correction.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::api;
use crate::net::types::{Subject, Task};
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::util::request::run_mutation;
use crate::util::validate::{subject_payload, task_payload};

const DEFAULT_CREDITS: &str = "5";
const DEFAULT_POINTS: &str = "10";

fn submit_label(editing: bool, submitting: bool, noun: &str) -> String {
    match (submitting, editing) {
        (true, true) => "Saving...".to_owned(),
        (true, false) => "Creating...".to_owned(),
        (false, true) => "Save Changes".to_owned(),
        (false, false) => format!("Create {noun}"),
    }
}

#[component]
pub fn SubjectForm(
    #[prop(optional)] existing: Option<Subject>,
    on_saved: Callback<Subject>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let editing_id = existing.as_ref().map(|s| s.id);

    let name = RwSignal::new(existing.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let description =
        RwSignal::new(existing.as_ref().and_then(|s| s.description.clone()).unwrap_or_default());
    let code = RwSignal::new(existing.as_ref().map(|s| s.code.clone()).unwrap_or_default());
    let credits = RwSignal::new(
        existing.as_ref().map_or_else(|| DEFAULT_CREDITS.to_owned(), |s| s.credits.to_string()),
    );
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match subject_payload(&name.get(), &description.get(), &code.get(), &credits.get()) {
            Ok(payload) => payload,
            Err(message) => {
                form.update(|f| f.reject(message));
                return;
            }
        };
        let fallback = if editing_id.is_some() { "Failed to update subject" } else { "Failed to create subject" };
        run_mutation(
            auth,
            form,
            fallback,
            move |token| async move {
                match editing_id {
                    Some(id) => api::update_subject(&token, id, &payload).await,
                    None => api::create_subject(&token, &payload).await,
                }
            },
            move |subject| {
                on_saved.run(subject);
                on_close.run(());
            },
        );
    };

    let heading = if editing_id.is_some() { "Edit Subject" } else { "Create New Subject" };

    view! {
        <div class="panel">
            <h3 class="panel__title">{heading}</h3>
            <ErrorBanner message=Signal::derive(move || form.with(|f| f.error.clone()))/>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Subject Name *"
                    <input
                        class="form__input"
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Description"
                    <textarea
                        class="form__input"
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__label">
                    "Subject Code * (e.g., IK-ABC123)"
                    <input
                        class="form__input"
                        type="text"
                        required
                        placeholder="IK-ABC123"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Credits *"
                    <input
                        class="form__input"
                        type="number"
                        min="1"
                        required
                        prop:value=move || credits.get()
                        on:input=move |ev| credits.set(event_target_value(&ev))
                    />
                </label>
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.submitting)>
                        {move || submit_label(editing_id.is_some(), form.with(|f| f.submitting), "Subject")}
                    </button>
                    <button class="btn btn--secondary" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn TaskForm(
    subject_id: i64,
    #[prop(optional)] existing: Option<Task>,
    on_saved: Callback<Task>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let editing_id = existing.as_ref().map(|t| t.id);

    let name = RwSignal::new(existing.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let description = RwSignal::new(existing.as_ref().map(|t| t.description.clone()).unwrap_or_default());
    let points =
        RwSignal::new(existing.as_ref().map_or_else(|| DEFAULT_POINTS.to_owned(), |t| t.points.to_string()));
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match task_payload(&name.get(), &description.get(), &points.get()) {
            Ok(payload) => payload,
            Err(message) => {
                form.update(|f| f.reject(message));
                return;
            }
        };
        let fallback = if editing_id.is_some() { "Failed to update task" } else { "Failed to create task" };
        run_mutation(
            auth,
            form,
            fallback,
            move |token| async move {
                match editing_id {
                    Some(id) => api::update_task(&token, id, &payload).await,
                    None => api::create_task(&token, subject_id, &payload).await,
                }
            },
            move |task| {
                on_saved.run(task);
                on_close.run(());
            },
        );
    };

    let heading = if editing_id.is_some() { "Edit Task" } else { "Create New Task" };

    view! {
        <div class="panel">
            <h3 class="panel__title">{heading}</h3>
            <ErrorBanner message=Signal::derive(move || form.with(|f| f.error.clone()))/>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Task Name *"
                    <input
                        class="form__input"
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Description *"
                    <textarea
                        class="form__input"
                        rows="4"
                        required
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__label">
                    "Max Points *"
                    <input
                        class="form__input"
                        type="number"
                        min="1"
                        required
                        prop:value=move || points.get()
                        on:input=move |ev| points.set(event_target_value(&ev))
                    />
                </label>
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.submitting)>
                        {move || submit_label(editing_id.is_some(), form.with(|f| f.submitting), "Task")}
                    </button>
                    <button class="btn btn--secondary" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
