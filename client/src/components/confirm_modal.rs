//! Yes/no confirmation dialog.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    message: &'static str,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    <h3 class="modal__title">{title}</h3>
                    <p class="modal__message">{message}</p>
                    <div class="modal__actions">
                        <button
                            class="btn btn--danger"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            "Confirm"
                        </button>
                        <button class="btn btn--secondary" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
