//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for the `/api` pass-through and the
//! upstream base URL. No request data is cached here.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialised.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()?;
        Ok(Self { http, upstream: Arc::from(config.api_url.as_str()) })
    }
}
