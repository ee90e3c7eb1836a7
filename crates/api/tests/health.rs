//! Tests for the root-level health endpoint and the shared middleware stack.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, new_app, send};
use tower::ServiceExt;

#[tokio::test]
async fn health_returns_ok_without_auth() {
    let (_store, app) = new_app();

    let response = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let (_store, app) = new_app();

    let response = send(&app, Method::GET, "/health", None, None).await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn incoming_request_id_is_propagated() {
    let (_store, app) = new_app();

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (_store, app) = new_app();

    let response = send(&app, Method::GET, "/api/projects", None, None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
