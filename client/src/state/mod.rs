//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data structs held in `RwSignal`s. `auth` and `toast` are app-wide
//! context; `view` and `form` are created per page.

pub mod auth;
pub mod form;
pub mod toast;
pub mod view;
