//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and request plumbing
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod format;
pub mod membership;
pub mod notify;
pub mod request;
pub mod session;
pub mod token_store;
pub mod validate;
