//! Runs the real API on an ephemeral port and drives it through the helper.

use std::sync::Arc;

use assert_matches::assert_matches;
use reporter_api::auth::jwt::JwtConfig;
use reporter_api::config::{LogFormat, ServerConfig};
use reporter_api::router::build_app_router;
use reporter_api::state::AppState;
use reporter_contract::{state_setup, ContractError, StateSetup, DEFAULT_CONSUMER, PROVIDER_URL_VAR};
use reporter_db::{MemoryStore, Store};

fn provider_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        request_timeout_secs: 30,
        database_url: None,
        contract_states_enabled: true,
        log_format: LogFormat::Text,
        jwt: JwtConfig {
            secret: "contract-test-secret".to_string(),
            access_token_expiry_mins: 5,
        },
    }
}

/// Serve the API in the background; returns its store and `/api` base URL.
async fn spawn_provider() -> (Arc<MemoryStore>, String) {
    let store = Arc::new(MemoryStore::new());
    let config = provider_config();
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (store, format!("http://{addr}/api"))
}

#[tokio::test]
async fn set_state_seeds_provider_fixtures() {
    let (store, url) = spawn_provider().await;
    let setup = StateSetup::new(url);

    let response = setup
        .set_state("scenario exists", DEFAULT_CONSUMER)
        .await
        .unwrap();

    assert_eq!(response["data"]["state"], "scenario exists");
    assert_eq!(response["data"]["consumer"], "integration-tests");
    let project = store.find_project("test-project").await.unwrap().unwrap();
    assert!(store
        .find_scenario(project.id, "test-scenario")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn later_state_replaces_earlier_one() {
    let (store, url) = spawn_provider().await;
    let setup = StateSetup::new(url);

    setup.set_state("project exists", "web").await.unwrap();
    setup.set_state("clean state", "web").await.unwrap();

    assert!(store.find_project("test-project").await.unwrap().is_none());
}

#[tokio::test]
async fn unknown_state_is_rejected() {
    let (_store, url) = spawn_provider().await;
    let setup = StateSetup::new(url);

    let err = setup.set_state("no such state", "web").await.unwrap_err();

    assert_matches!(err, ContractError::Rejected { status: 400, .. });
}

#[tokio::test]
async fn unreachable_provider_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let setup = StateSetup::new(format!("http://{addr}/api"));

    let err = setup.set_state("clean state", "web").await.unwrap_err();

    assert_matches!(err, ContractError::Request(_));
}

/// The only test in this file that touches `PROVIDER_URL`.
#[tokio::test]
async fn state_setup_reads_provider_url_and_defaults_consumer() {
    let (store, url) = spawn_provider().await;
    std::env::set_var(PROVIDER_URL_VAR, &url);

    let response = state_setup("project exists", None).await.unwrap();

    assert_eq!(response["data"]["consumer"], "integration-tests");
    assert_eq!(response["data"]["state"], "project exists");
    assert!(store.find_project("test-project").await.unwrap().is_some());

    let response = state_setup("clean state", Some("web")).await.unwrap();
    assert_eq!(response["data"]["consumer"], "web");
    assert!(store.find_project("test-project").await.unwrap().is_none());
}
