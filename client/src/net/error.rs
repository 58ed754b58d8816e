//! Error type for remote API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends up as one short user-facing message: the server's
//! `detail` when it sent one, otherwise the caller's generic fallback.
//! `401` is kept distinct so the session layer can sign the user out.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthorized { detail: Option<String> },
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        if status == 401 {
            Self::Unauthorized { detail }
        } else {
            Self::Status { status, detail }
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Message to show inline: the server's detail, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Unauthorized { detail: Some(detail) } | Self::Status { detail: Some(detail), .. } => {
                detail.clone()
            }
            _ => fallback.to_owned(),
        }
    }
}

/// Pull a readable message out of an error body.
///
/// Accepts `{"detail": "text"}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}` (messages joined with `"; "`).
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .filter(|msg| !msg.trim().is_empty())
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}
