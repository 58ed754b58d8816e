//! Registration page. Creates a student account and hands off to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::pages::login::REGISTERED_QUERY;
use crate::state::form::FormState;
use crate::util::validate::{MIN_PASSWORD_LEN, MIN_USERNAME_LEN, validate_registration};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate(&format!("/login?{REGISTERED_QUERY}=1"), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let username_value = username.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_registration(&username_value, &email_value, &password_value) {
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
            match crate::util::session::register(&username_value, &email_value, &password_value).await {
                Ok(_) => {
                    form.update(FormState::succeed);
                    registered.set(true);
                }
                Err(err) => form.update(|f| f.fail(err.user_message("Registration failed"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Create Account"</h2>
                <p class="auth-card__subtitle">"Join the LMS platform"</p>
                <ErrorBanner message=Signal::derive(move || form.with(|f| f.error.clone()))/>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Username"
                        <input
                            class="form__input"
                            type="text"
                            required
                            minlength=MIN_USERNAME_LEN.to_string()
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
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
                            minlength=MIN_PASSWORD_LEN.to_string()
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || form.with(|f| f.submitting)>
                        {move || if form.with(|f| f.submitting) { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">"Already have an account? " <a href="/login">"Login"</a></p>
            </div>
        </div>
    }
}
