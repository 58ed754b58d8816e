//! Toast push + timed dismissal.

use leptos::prelude::*;

use crate::state::toast::{TOAST_DURATION_MS, ToastKind, ToastState};

/// Show a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    let message = message.into();
    toasts.update(|state| id = state.push(kind, message));

    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
        toasts.update(|state| state.dismiss(id));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, TOAST_DURATION_MS);
    }
}
