//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The bearer token lives here
//! alongside the user so every request helper reads it from one place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::{Role, User};

pub const RESTORE_FAILED_MESSAGE: &str = "Could not reach the LMS service. Please try again.";

/// Authentication state tracking the current user, token, and loading status.
///
/// Provided to the tree as `RwSignal<AuthState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    /// Why a stored session could not be checked, shown on the login page.
    pub notice: Option<String>,
}

impl AuthState {
    /// Initial state while a stored token is being checked against `/api/auth/me`.
    #[must_use]
    pub fn restoring() -> Self {
        Self { user: None, token: None, loading: true, notice: None }
    }

    #[must_use]
    pub fn signed_in(user: User, token: String) -> Self {
        Self { user: Some(user), token: Some(token), loading: false, notice: None }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, token: None, loading: false, notice: None }
    }

    /// State after the stored token could not be confirmed.
    ///
    /// A rejected token (`401`) ends quietly. Any other failure leaves the
    /// stored token alone and keeps a message so the login page can explain
    /// that the service could not be reached.
    #[must_use]
    pub fn restore_failed(err: &ApiError) -> Self {
        let notice = (!err.is_unauthorized()).then(|| err.user_message(RESTORE_FAILED_MESSAGE));
        Self { notice, ..Self::signed_out() }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(User::role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Clear the session when `err` says the token is no longer accepted.
    ///
    /// Returns `true` when the session was cleared.
    pub fn absorb_error(&mut self, err: &ApiError) -> bool {
        if err.is_unauthorized() {
            *self = Self::signed_out();
            true
        } else {
            false
        }
    }
}
