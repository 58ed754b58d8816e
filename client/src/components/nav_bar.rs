//! Top navigation bar for authenticated pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::LOGIN_PATH;
use crate::util::session;

/// Brand, portal label, greeting, optional back link, and logout.
#[component]
pub fn NavBar(
    #[prop(optional, into)] back_href: Option<String>,
    #[prop(optional)] back_label: Option<&'static str>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let portal = move || auth.with(|a| a.role().map(|r| r.portal_label()).unwrap_or_default());
    let username = move || auth.with(|a| a.user.as_ref().map(|u| u.username.clone()).unwrap_or_default());

    let on_logout = move |_| {
        session::sign_out(auth);
        navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
    };

    let back = back_href.map(|href| {
        let label = back_label.unwrap_or("← Back");
        view! { <a class="nav-bar__back" href=href>{label}</a> }
    });

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__brand">
                <h1>"LMS"</h1>
                <p class="nav-bar__portal">{portal}</p>
            </div>
            {back}
            <div class="nav-bar__user">
                <span class="nav-bar__greeting">"Welcome back, "</span>
                <span class="nav-bar__username">{username}</span>
                <button class="btn btn--secondary" on:click=on_logout>"Logout"</button>
            </div>
        </nav>
    }
}
