use super::*;

use axum::body::Body;
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState { http: reqwest::Client::new(), upstream: std::sync::Arc::from("http://127.0.0.1:9") }
}

#[tokio::test]
async fn healthz_returns_ok() {
    let request = axum::http::Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let response = api_routes(test_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn non_api_paths_are_not_proxied() {
    let request = axum::http::Request::builder().uri("/teacher").body(Body::empty()).unwrap();
    let response = api_routes(test_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
