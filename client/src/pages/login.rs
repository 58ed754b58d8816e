//! Login page: email + password exchange for a bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. A successful sign-in updates `AuthState`; the redirect
//! effect then forwards to `/`, which routes by role. `?registered=1` shows
//! the post-registration notice.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::error_banner::{ErrorBanner, NoticeBanner};
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::util::validate::validate_login;

pub const REGISTERED_QUERY: &str = "registered";
const REGISTERED_NOTICE: &str = "Registration successful! Please login.";

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Logging in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    Effect::new(move || {
        if auth.with(AuthState::is_authenticated) {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let show_notice = move || query.with(|q| q.get(REGISTERED_QUERY).is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_login(&email_value, &password_value) {
            form.update(|f| f.reject(message));
            return;
        }
        let mut started = false;
        form.update(|f| started = f.try_begin());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::session::sign_in(auth, &email_value, &password_value).await {
                Ok(user) => {
                    log::info!("signed in as {}", user.username);
                    form.update(FormState::succeed);
                }
                Err(err) => form.update(|f| f.fail(err.user_message("Login failed"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Welcome Back"</h2>
                <p class="auth-card__subtitle">"Sign in to your LMS account"</p>
                <Show when=show_notice>
                    <NoticeBanner message=REGISTERED_NOTICE.to_owned()/>
                </Show>
                <ErrorBanner message=Signal::derive(move || {
                    form.with(|f| f.error.clone()).or_else(|| auth.with(|a| a.notice.clone()))
                })/>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || form.with(|f| f.submitting)>
                        {move || submit_label(form.with(|f| f.submitting))}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
