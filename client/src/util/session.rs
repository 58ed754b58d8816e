//! Session lifecycle: restore, sign in, register, sign out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps `RwSignal<AuthState>` and the stored token in step. Any request that
//! comes back `401` goes through `report_failure`, which drops both so the
//! route guard redirects to `/login`. Only a `401` discards the stored token;
//! an outage at startup keeps it for the next page load.

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{RegisterRequest, User};
use crate::state::auth::AuthState;
use crate::util::token_store;

/// Validate a stored token on startup and populate the session.
pub async fn restore(auth: RwSignal<AuthState>) {
    let Some(token) = token_store::load() else {
        auth.set(AuthState::signed_out());
        return;
    };
    match api::fetch_current_user(&token).await {
        Ok(user) => auth.set(AuthState::signed_in(user, token)),
        Err(err) => {
            if err.is_unauthorized() {
                #[cfg(feature = "hydrate")]
                log::info!("stored session rejected: {err}");
                token_store::clear();
            } else {
                #[cfg(feature = "hydrate")]
                log::warn!("could not verify stored session: {err}");
            }
            auth.set(AuthState::restore_failed(&err));
        }
    }
}

/// Log in, resolve the user, and persist the token.
///
/// # Errors
///
/// Returns the API error from either the login or the identity call.
pub async fn sign_in(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<User, ApiError> {
    let token = api::login(email, password).await?.access_token;
    let user = api::fetch_current_user(&token).await?;
    token_store::save(&token);
    auth.set(AuthState::signed_in(user.clone(), token));
    Ok(user)
}

/// Create an account. The user still has to log in afterwards.
///
/// # Errors
///
/// Returns the API error (for example an email that is already registered).
pub async fn register(username: &str, email: &str, password: &str) -> Result<User, ApiError> {
    let request = RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    };
    api::register(&request).await
}

pub fn sign_out(auth: RwSignal<AuthState>) {
    token_store::clear();
    auth.set(AuthState::signed_out());
}

/// Turn a failed request into an inline message, clearing the session on `401`.
pub fn report_failure(auth: RwSignal<AuthState>, err: &ApiError, fallback: &str) -> String {
    let mut cleared = false;
    auth.update(|state| cleared = state.absorb_error(err));
    if cleared {
        token_store::clear();
    }
    err.user_message(fallback)
}
