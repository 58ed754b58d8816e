//! Glue between page state signals and async API calls.
//!
//! DESIGN
//! ======
//! Pages describe a request as a closure over the bearer token; these helpers
//! own the loading/submitting flags, error routing, and `401` handling so every
//! page behaves the same way. Nothing here retries.

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::view::ViewState;
use crate::util::notify::notify;
use crate::util::session::report_failure;

const INVALID_ROUTE_MESSAGE: &str = "Not found";

/// Fetch into `view` on mount, whenever `key` changes, and after every
/// `ViewState::invalidate`.
///
/// `key` is the tracked route input (usually a parsed `:id`). `None` means the
/// route cannot be served and finishes the view with `invalid_message`.
pub fn install_loader<K, T, KF, F, Fut>(
    auth: RwSignal<AuthState>,
    view: RwSignal<ViewState<T>>,
    fallback: &'static str,
    key: KF,
    request: F,
) where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Send + Sync + 'static,
    KF: Fn() -> Option<K> + Send + Sync + 'static,
    F: Fn(String, K) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let reload_seq = Memo::new(move |_| view.with(|v| v.reload_seq));
    let token = Memo::new(move |_| auth.with(|a| a.token.clone()));
    let key = Memo::new(move |_| key());

    Effect::new(move || {
        reload_seq.track();
        let Some(token) = token.get() else {
            return;
        };
        let mut ticket = 0;
        view.update(|v| ticket = v.begin_load());
        let Some(key) = key.get() else {
            view.update(|v| v.finish(Err(INVALID_ROUTE_MESSAGE.to_owned())));
            return;
        };
        let pending = request(token, key);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = pending.await.map_err(|err| report_failure(auth, &err, fallback));
            view.update(|v| {
                if !v.finish_request(ticket, result) {
                    log::debug!("dropped stale response for request {ticket}");
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (pending, fallback, ticket);
        }
    });
}

/// Submit a form. Failures land in `form.error`; success runs `on_success`.
pub fn run_mutation<T, F, Fut, S>(
    auth: RwSignal<AuthState>,
    form: RwSignal<FormState>,
    fallback: &'static str,
    request: F,
    on_success: S,
) where
    T: 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce(T) + 'static,
{
    run_with(auth, form, fallback, request, on_success, |_| {});
}

/// Run a button action whose outcome is reported as a toast.
pub fn run_action<T, F, Fut, S>(
    auth: RwSignal<AuthState>,
    busy: RwSignal<FormState>,
    toasts: RwSignal<ToastState>,
    success_message: &'static str,
    fallback: &'static str,
    request: F,
    on_success: S,
) where
    T: 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce(T) + 'static,
{
    run_with(
        auth,
        busy,
        fallback,
        request,
        move |value| {
            notify(toasts, ToastKind::Success, success_message);
            on_success(value);
        },
        move |message| notify(toasts, ToastKind::Error, message),
    );
}

fn run_with<T, F, Fut, S, E>(
    auth: RwSignal<AuthState>,
    form: RwSignal<FormState>,
    fallback: &'static str,
    request: F,
    on_success: S,
    on_failure: E,
) where
    T: 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce(T) + 'static,
    E: FnOnce(String) + 'static,
{
    let mut started = false;
    form.update(|f| started = f.try_begin());
    if !started {
        return;
    }
    let Some(token) = auth.get_untracked().token else {
        form.update(|f| f.fail(fallback));
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match request(token).await {
            Ok(value) => {
                form.update(FormState::succeed);
                on_success(value);
            }
            Err(err) => {
                let message = report_failure(auth, &err, fallback);
                form.update(|f| f.fail(message.clone()));
                on_failure(message);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request, on_success, on_failure);
    }
}
