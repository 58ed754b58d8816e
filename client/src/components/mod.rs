//! Reusable UI components shared by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components here carry no fetch logic of their own; pages own requests and
//! pass data or callbacks down.

pub mod confirm_modal;
pub mod error_banner;
pub mod nav_bar;
pub mod route_guard;
pub mod subject_card;
pub mod toast_host;
