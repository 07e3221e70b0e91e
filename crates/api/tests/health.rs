mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use common::{build_test_app, expect_json, get};

#[tokio::test]
async fn health_reports_ok_for_in_memory_store() {
    let app = build_test_app();

    let response = get(&app.router, "/health").await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["store_healthy"], true);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = build_test_app();

    let response = get(&app.router, "/health").await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn caller_request_id_is_echoed() {
    let app = build_test_app();

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "monitor-42")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "monitor-42");
}
