//! HTTP-level integration tests for scenario notifications.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, new_app, post_json, seed_scenario};
use serde_json::json;

const NOTIFICATIONS: &str = "/api/projects/shop/scenarios/checkout/notifications";

fn teams_hook(name: &str) -> serde_json::Value {
    json!({ "name": name, "url": "https://hooks.example.com/teams/abc", "type": "ms-teams" })
}

#[tokio::test]
async fn create_and_list_notifications() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "checkout").await;

    let created = post_json(&app, NOTIFICATIONS, "operator", teams_hook("qa channel")).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["data"]["type"], "ms-teams");
    assert_eq!(created["data"]["name"], "qa channel");

    post_json(&app, NOTIFICATIONS, "admin", teams_hook("ops channel")).await;

    let listed = get(&app, NOTIFICATIONS, "readonly").await;
    assert_eq!(listed.status(), StatusCode::OK);
    let listed = body_json(listed).await;
    let names: Vec<&str> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["qa channel", "ops channel"]);
}

#[tokio::test]
async fn notifications_of_missing_scenario_are_404() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "search").await;

    let listed = get(&app, NOTIFICATIONS, "readonly").await;
    assert_eq!(listed.status(), StatusCode::NOT_FOUND);

    let created = post_json(&app, NOTIFICATIONS, "admin", teams_hook("x")).await;
    assert_eq!(created.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_notification_body_is_400() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "checkout").await;

    for body in [
        json!({ "name": "x", "url": "not-a-url", "type": "slack" }),
        json!({ "name": "x", "url": "https://hooks.example.com", "type": "pager" }),
        json!({ "name": "", "url": "https://hooks.example.com", "type": "gchat" }),
        json!({ "url": "https://hooks.example.com", "type": "gchat" }),
    ] {
        let response = post_json(&app, NOTIFICATIONS, "admin", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR", "body: {body}");
    }
}

#[tokio::test]
async fn delete_notification_returns_204() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "checkout").await;
    let created = body_json(post_json(&app, NOTIFICATIONS, "admin", teams_hook("x")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete(&app, &format!("{NOTIFICATIONS}/{id}"), "operator").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listed = body_json(get(&app, NOTIFICATIONS, "readonly").await).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_notification_of_another_scenario_is_404() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "checkout").await;
    seed_scenario(&store, "shop", "search").await;
    let created = body_json(post_json(&app, NOTIFICATIONS, "admin", teams_hook("x")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete(
        &app,
        &format!("/api/projects/shop/scenarios/search/notifications/{id}"),
        "admin",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Notification '{id}' not found")
    );
}

#[tokio::test]
async fn non_numeric_or_zero_notification_id_is_400() {
    let (store, app) = new_app();
    seed_scenario(&store, "shop", "checkout").await;

    for id in ["abc", "0", "-3"] {
        let response = delete(&app, &format!("{NOTIFICATIONS}/{id}"), "admin").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id: {id}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}
