#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use reporter_api::auth::jwt::{generate_access_token, JwtConfig};
use reporter_api::config::{LogFormat, ServerConfig};
use reporter_api::router::build_app_router;
use reporter_api::state::AppState;
use reporter_core::schema::CreateScenario;
use reporter_db::models::scenario::Scenario;
use reporter_db::{MemoryStore, PgStore, Store};
use sqlx::PgPool;

pub const TEST_SECRET: &str = "integration-test-secret-long-enough";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        contract_states_enabled: true,
        log_format: LogFormat::Text,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// The application router over a migrated PostgreSQL pool.
pub fn build_pg_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh store plus an app over it.
pub fn new_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app(Arc::clone(&store));
    (store, app)
}

/// A valid access token carrying `role`.
pub fn token(role: &str) -> String {
    generate_access_token(7, role, &test_config().jwt).unwrap()
}

/// Send one request through the app.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str, role: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(&token(role)), None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    role: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(&token(role)), Some(body)).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    role: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(&token(role)), Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, role: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(&token(role)), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create project `project` holding scenario `scenario`.
pub async fn seed_scenario(store: &MemoryStore, project: &str, scenario: &str) -> Scenario {
    let project = match store.find_project(project).await.unwrap() {
        Some(p) => p,
        None => store.create_project(project).await.unwrap(),
    };
    store
        .create_scenario(project.id, &CreateScenario::named(scenario))
        .await
        .unwrap()
}
