use super::*;

use axum::Router;
use axum::routing::{any, get};
use tower::ServiceExt;

fn state_for(upstream: &str) -> AppState {
    AppState { http: reqwest::Client::new(), upstream: std::sync::Arc::from(upstream) }
}

fn proxy_router(state: AppState) -> Router {
    Router::new().route("/api/{*path}", any(forward)).with_state(state)
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Fake LMS API on an ephemeral port.
async fn spawn_upstream() -> String {
    async fn me(headers: HeaderMap) -> Response {
        match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
            Some(auth) => Json(serde_json::json!({ "seen_authorization": auth })).into_response(),
            None => (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "detail": "Not authenticated" }))).into_response(),
        }
    }
    async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "method": method.as_str(),
            "uri": uri.to_string(),
            "cookie": headers.get(header::COOKIE).is_some(),
            "body": String::from_utf8_lossy(&body),
        }))
    }
    async fn gone() -> StatusCode {
        StatusCode::NO_CONTENT
    }

    let app = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/teacher/subjects/{id}", axum::routing::delete(gone))
        .route("/api/echo/{*rest}", any(echo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn upstream_url_joins_path_and_query() {
    let uri: Uri = "/api/student/subjects?skip=0&limit=10".parse().unwrap();
    assert_eq!(
        upstream_url("http://lms:8000/", &uri),
        "http://lms:8000/api/student/subjects?skip=0&limit=10"
    );
    let bare: Uri = "/api/auth/me".parse().unwrap();
    assert_eq!(upstream_url("http://lms:8000", &bare), "http://lms:8000/api/auth/me");
}

#[test]
fn forwarded_headers_keeps_only_api_headers() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    incoming.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert(header::COOKIE, HeaderValue::from_static("session=1"));
    incoming.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    incoming.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get(header::COOKIE).is_none());
    assert!(out.get(header::HOST).is_none());
}

// =============================================================================
// forward
// =============================================================================

#[tokio::test]
async fn unreachable_upstream_answers_502_with_detail() {
    // Port 9 (discard) is not expected to accept connections locally.
    let app = proxy_router(state_for("http://127.0.0.1:9"));
    let request = axum::http::Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await, serde_json::json!({ "detail": "LMS API is unavailable" }));
}

#[tokio::test]
async fn relays_upstream_401_verbatim() {
    let upstream = spawn_upstream().await;
    let app = proxy_router(state_for(&upstream));
    let request = axum::http::Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, serde_json::json!({ "detail": "Not authenticated" }));
}

#[tokio::test]
async fn forwards_bearer_token() {
    let upstream = spawn_upstream().await;
    let app = proxy_router(state_for(&upstream));
    let request = axum::http::Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, "Bearer tok123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "seen_authorization": "Bearer tok123" }));
}

#[tokio::test]
async fn forwards_method_query_and_body_without_cookies() {
    let upstream = spawn_upstream().await;
    let app = proxy_router(state_for(&upstream));
    let request = axum::http::Request::builder()
        .method(Method::PUT)
        .uri("/api/echo/teacher/tasks/4?x=1")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, "secret=1")
        .body(Body::from(r#"{"points":10}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "method": "PUT",
            "uri": "/api/echo/teacher/tasks/4?x=1",
            "cookie": false,
            "body": r#"{"points":10}"#
        })
    );
}

#[tokio::test]
async fn relays_empty_204_without_content_type() {
    let upstream = spawn_upstream().await;
    let app = proxy_router(state_for(&upstream));
    let request = axum::http::Request::builder()
        .method(Method::DELETE)
        .uri("/api/teacher/subjects/3")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.headers().get(header::CONTENT_TYPE).is_none());
}
