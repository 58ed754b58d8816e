//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: unauthenticated users
//! go to `/login`, `/` forwards to the role dashboard, and a user inside the
//! other role's area is sent back to their own. Role routing is convenience
//! only; the API rejects cross-role calls regardless.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// What a guarded route should do for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still in flight.
    Wait,
    Render,
    Redirect(&'static str),
}

/// Decide how a route restricted to `area` (or any signed-in user when `None`)
/// handles `state`.
#[must_use]
pub fn guard_decision(state: &AuthState, area: Option<Role>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    let Some(role) = state.role() else {
        return GuardDecision::Redirect(LOGIN_PATH);
    };
    match area {
        Some(area) if area != role => GuardDecision::Redirect(role.dashboard_path()),
        _ => GuardDecision::Render,
    }
}

/// Target for the `/` dashboard router: the role dashboard, or `/login`.
#[must_use]
pub fn dashboard_redirect(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    Some(state.role().map_or(LOGIN_PATH, Role::dashboard_path))
}

/// Redirect whenever `guard_decision` says so. Navigation replaces the
/// current history entry so Back does not bounce through the guard.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, area: Option<Role>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = guard_decision(&auth.get(), area) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
