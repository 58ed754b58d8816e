//! Host-server configuration parsed from environment variables.
//!
//! Variables (all optional, `.env` honoured via `dotenvy`):
//! - `PORT`: listen port, default 3000
//! - `LMS_API_URL`: remote LMS API base URL, default `http://127.0.0.1:8000`
//! - `LMS_API_TIMEOUT_SECS`: upstream request timeout, default 30
//! - `CORS_PERMISSIVE`: allow any origin on the host routes, default off

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("LMS_API_URL must start with http:// or https://, got {0:?}")]
    InvalidApiUrl(String),
    #[error("LMS_API_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api_url: String,
    pub api_timeout_secs: u64,
    pub cors_permissive: bool,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `PORT`, `LMS_API_URL` or `LMS_API_TIMEOUT_SECS`
    /// is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            api_url: normalize_api_url(std::env::var("LMS_API_URL").ok().as_deref())?,
            api_timeout_secs: parse_timeout(std::env::var("LMS_API_TIMEOUT_SECS").ok().as_deref())?,
            cors_permissive: env_bool("CORS_PERMISSIVE").unwrap_or(false),
        })
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// A zero timeout would fail every upstream call, so it is rejected.
fn parse_timeout(raw: Option<&str>) -> Result<u64, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_API_TIMEOUT_SECS),
        Some(value) => match value.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::InvalidTimeout(value.to_owned())),
        },
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

/// Trim and strip the trailing slash so paths can be appended directly.
fn normalize_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_URL);
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(url.to_owned()));
    }
    Ok(url.trim_end_matches('/').to_owned())
}
