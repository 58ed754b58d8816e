//! Inline error and notice banners.

use leptos::prelude::*;

/// Red banner shown only while `message` is `Some`.
#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <div class="banner banner--error" role="alert">{text}</div> })
}

/// Green banner for one-off success notices.
#[component]
pub fn NoticeBanner(message: String) -> impl IntoView {
    view! { <div class="banner banner--success">{message}</div> }
}
