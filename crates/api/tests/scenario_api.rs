//! HTTP-level integration tests for scenario CRUD.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, new_app, post_json, put_json, seed_scenario};
use reporter_db::Store;
use serde_json::json;

const SCENARIOS: &str = "/api/projects/shop/scenarios";

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_scenarios_returns_sorted_data_envelope() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "search").await;
    seed_scenario(&store, "shop", "checkout").await;
    seed_scenario(&store, "blog", "reading").await;

    let response = get(&app, SCENARIOS, "readonly").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["checkout", "search"]);
}

#[tokio::test]
async fn list_scenarios_of_unknown_project_is_404() {
    let (_store, app) = new_app();

    let response = get(&app, "/api/projects/ghost/scenarios", "admin").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project 'ghost' not found");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_scenario_returns_201_with_defaults_applied() {
    let (store, app) = new_app();
    store.create_project("shop").await.unwrap();

    let response = post_json(
        &app,
        SCENARIOS,
        "operator",
        json!({ "name": "checkout", "thresholdEnabled": true, "thresholdErrorRate": 2.5 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "checkout");
    assert_eq!(json["data"]["thresholdEnabled"], true);
    assert_eq!(json["data"]["thresholdErrorRate"], 2.5);
    assert_eq!(json["data"]["thresholdThroughput"], 5.0);
    assert_eq!(json["data"]["analysisEnabled"], true);
    assert_eq!(json["data"]["keepTestRunsPeriod"], 0);
}

#[tokio::test]
async fn create_duplicate_scenario_is_409() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "checkout").await;

    let response = post_json(&app, SCENARIOS, "admin", json!({ "name": "checkout" })).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[tokio::test]
async fn create_scenario_in_unknown_project_is_404() {
    let (_store, app) = new_app();

    let response = post_json(&app, SCENARIOS, "admin", json!({ "name": "checkout" })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_scenario_with_invalid_body_is_400() {
    let (store, app) = new_app();
    store.create_project("shop").await.unwrap();

    for body in [
        json!({}),
        json!({ "name": "" }),
        json!({ "name": "x", "thresholdPercentile": 101 }),
        json!({ "name": "x", "keepTestRunsPeriod": -1 }),
        json!({ "name": "x", "unexpected": true }),
        json!({ "name": 42 }),
    ] {
        let response = post_json(&app, SCENARIOS, "admin", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR", "body: {body}");
    }
}

// ---------------------------------------------------------------------------
// Get / update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_scenario_returns_it() {
    let (store, app) = new_app();
    let scenario = seed_scenario(&store, "shop", "checkout").await;

    let response = get(&app, "/api/projects/shop/scenarios/checkout", "readonly").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], scenario.id);
    assert_eq!(json["data"]["projectId"], scenario.project_id);
}

#[tokio::test]
async fn get_missing_scenario_is_404() {
    let (store, app) = new_app();
    store.create_project("shop").await.unwrap();

    let response = get(&app, "/api/projects/shop/scenarios/nope", "readonly").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Scenario 'nope' not found");
}

#[tokio::test]
async fn update_scenario_applies_present_fields() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "checkout").await;

    let response = put_json(
        &app,
        "/api/projects/shop/scenarios/checkout",
        "operator",
        json!({ "name": "checkout-v2", "deleteSamples": true }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "checkout-v2");
    assert_eq!(json["data"]["deleteSamples"], true);
    assert_eq!(json["data"]["analysisEnabled"], true);

    let old = get(&app, "/api/projects/shop/scenarios/checkout", "readonly").await;
    assert_eq!(old.status(), StatusCode::NOT_FOUND);
    let renamed = get(&app, "/api/projects/shop/scenarios/checkout-v2", "readonly").await;
    assert_eq!(renamed.status(), StatusCode::OK);
}

#[tokio::test]
async fn null_description_is_left_unchanged_and_empty_string_blanks_it() {
    let (store, app) = new_app();
    store.create_project("shop").await.unwrap();
    post_json(
        &app,
        SCENARIOS,
        "admin",
        json!({ "name": "checkout", "description": "nightly" }),
    )
    .await;
    let uri = "/api/projects/shop/scenarios/checkout";

    let kept = body_json(put_json(&app, uri, "admin", json!({ "description": null })).await).await;
    assert_eq!(kept["data"]["description"], "nightly");

    let blanked = body_json(put_json(&app, uri, "admin", json!({ "description": "" })).await).await;
    assert_eq!(blanked["data"]["description"], "");
}

#[tokio::test]
async fn rename_onto_existing_scenario_is_409() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "checkout").await;
    seed_scenario(&store, "shop", "search").await;

    let response = put_json(
        &app,
        "/api/projects/shop/scenarios/checkout",
        "admin",
        json!({ "name": "search" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_missing_scenario_is_404() {
    let (store, app) = new_app();
    store.create_project("shop").await.unwrap();

    let response = put_json(
        &app,
        "/api/projects/shop/scenarios/nope",
        "admin",
        json!({ "analysisEnabled": false }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_scenario_returns_204_then_404() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "checkout").await;

    let first = delete(&app, "/api/projects/shop/scenarios/checkout", "admin").await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = delete(&app, "/api/projects/shop/scenarios/checkout", "admin").await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn overlong_scenario_name_in_path_is_400() {
    let (store, app) = new_app();
    store.create_project("shop").await.unwrap();
    let uri = format!("/api/projects/shop/scenarios/{}", "x".repeat(101));

    let response = get(&app, &uri, "readonly").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
