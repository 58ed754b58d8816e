//! Networking modules for the remote LMS HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `error` classifies failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
