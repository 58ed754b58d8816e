//! Fixed-position toast stack.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders the app-wide toast queue. Clicking a toast dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast.kind.css_class()
                                on:click=move |_| toasts.update(|s| s.dismiss(id))
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
