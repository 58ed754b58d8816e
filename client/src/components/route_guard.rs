//! Guard wrapper for authenticated routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders its page through this component, which
//! holds a loading placeholder while the session restores and redirects per
//! `util::auth::guard_decision`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_decision, install_guard_redirect};

/// Render `children` only for a signed-in user allowed in `area`.
#[component]
pub fn RouteGuard(#[prop(optional, into)] area: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_guard_redirect(auth, area, move |path, options| navigate(path, options));

    let decision = Memo::new(move |_| guard_decision(&auth.get(), area));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
