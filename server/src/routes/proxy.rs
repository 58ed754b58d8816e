//! Same-origin pass-through of `/api/*` to the remote LMS API.
//!
//! DESIGN
//! ======
//! The browser app only ever talks to its own origin. This handler forwards
//! method, path, query, body and the small set of headers the API reads, and
//! relays the upstream status and body verbatim. It adds no business logic,
//! retries, or caching.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `502` with a `{"detail": ...}` body so the
//! client shows them through its normal error path.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Request headers forwarded upstream.
const FORWARDED_REQUEST_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Response headers relayed back to the browser.
const RELAYED_RESPONSE_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::WWW_AUTHENTICATE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream response could not be read: {0}")]
    Body(reqwest::Error),
}

impl ProxyError {
    fn detail(&self) -> &'static str {
        match self {
            Self::Upstream(e) if e.is_timeout() => "LMS API timed out",
            Self::Upstream(_) => "LMS API is unavailable",
            Self::Body(_) => "LMS API returned an unreadable response",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api pass-through failed");
        let status = match &self {
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        };
        (status, Json(serde_json::json!({ "detail": self.detail() }))).into_response()
    }
}

/// Join the upstream base with the incoming path and query.
pub(crate) fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Keep only the headers the API needs; drops cookies, host, and hop-by-hop headers.
pub(crate) fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    copy_headers(incoming, &FORWARDED_REQUEST_HEADERS)
}

fn copy_headers(from: &HeaderMap, names: &[header::HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in from.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`
///
/// # Errors
///
/// Returns `ProxyError` when the upstream cannot be reached or its body
/// cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request = state.http.request(method, &url).headers(forwarded_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }
    let upstream = request.send().await?;

    let status = upstream.status();
    let relayed = copy_headers(upstream.headers(), &RELAYED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(ProxyError::Body)?;
    let has_body = !bytes.is_empty();

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = relayed;
    if has_body && !response.headers().contains_key(header::CONTENT_TYPE) {
        response.headers_mut().insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    Ok(response)
}
