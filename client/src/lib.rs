//! # client
//!
//! Leptos + WASM frontend for the learning-management system. Teachers
//! manage subjects, tasks and grading; students enroll and submit solutions.
//!
//! The crate is a thin presentation layer: every piece of data is fetched
//! from, or pushed to, the remote LMS API. It contains pages, components,
//! session/view state, API types and the REST client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
