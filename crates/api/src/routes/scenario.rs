//! Route definitions for scenarios and their notifications and trends.
//!
//! Every handler's extractor list is its middleware chain: authentication
//! and role check, path schema, body schema (writes only), then the handler.
//! [`SCENARIO_ROUTES`] records that chain per route.

use axum::routing::{delete, get};
use axum::Router;
use reporter_core::roles::{AllowedRole, READ_ROLES, WRITE_ROLES};

use crate::handlers::{scenario, scenario_notification, scenario_trends};
use crate::state::AppState;

pub const SCENARIOS_PATH: &str = "/projects/{projectName}/scenarios";
pub const SCENARIO_PATH: &str = "/projects/{projectName}/scenarios/{scenarioName}";
pub const NOTIFICATIONS_PATH: &str =
    "/projects/{projectName}/scenarios/{scenarioName}/notifications";
pub const NOTIFICATION_PATH: &str =
    "/projects/{projectName}/scenarios/{scenarioName}/notifications/{notificationId}";
pub const TRENDS_PATH: &str = "/projects/{projectName}/scenarios/{scenarioName}/trends";

/// One row of the scenario route table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSpec {
    pub method: &'static str,
    /// Path relative to the `/api` prefix.
    pub path: &'static str,
    pub roles: &'static [AllowedRole],
    pub params_schema: &'static str,
    pub body_schema: Option<&'static str>,
    pub controller: &'static str,
}

pub const SCENARIO_ROUTES: &[RouteSpec] = &[
    RouteSpec {
        method: "GET",
        path: SCENARIOS_PATH,
        roles: READ_ROLES,
        params_schema: "ProjectNameParam",
        body_schema: None,
        controller: "get_scenarios",
    },
    RouteSpec {
        method: "POST",
        path: SCENARIOS_PATH,
        roles: WRITE_ROLES,
        params_schema: "ProjectNameParam",
        body_schema: Some("CreateScenario"),
        controller: "create_scenario",
    },
    RouteSpec {
        method: "GET",
        path: SCENARIO_PATH,
        roles: READ_ROLES,
        params_schema: "ScenarioParams",
        body_schema: None,
        controller: "get_scenario",
    },
    RouteSpec {
        method: "PUT",
        path: SCENARIO_PATH,
        roles: WRITE_ROLES,
        params_schema: "ScenarioParams",
        body_schema: Some("UpdateScenario"),
        controller: "update_scenario",
    },
    RouteSpec {
        method: "DELETE",
        path: SCENARIO_PATH,
        roles: WRITE_ROLES,
        params_schema: "ScenarioParams",
        body_schema: None,
        controller: "delete_scenario",
    },
    RouteSpec {
        method: "GET",
        path: NOTIFICATIONS_PATH,
        roles: READ_ROLES,
        params_schema: "ScenarioParams",
        body_schema: None,
        controller: "get_scenario_notifications",
    },
    RouteSpec {
        method: "POST",
        path: NOTIFICATIONS_PATH,
        roles: WRITE_ROLES,
        params_schema: "ScenarioParams",
        body_schema: Some("CreateNotification"),
        controller: "create_scenario_notification",
    },
    RouteSpec {
        method: "DELETE",
        path: NOTIFICATION_PATH,
        roles: WRITE_ROLES,
        params_schema: "NotificationParams",
        body_schema: None,
        controller: "delete_scenario_notification",
    },
    RouteSpec {
        method: "GET",
        path: TRENDS_PATH,
        roles: READ_ROLES,
        params_schema: "ScenarioParams",
        body_schema: None,
        controller: "get_scenario_trends",
    },
];

/// Scenario routes, merged under `/api`.
///
/// ```text
/// GET    /projects/{projectName}/scenarios                         -> get_scenarios
/// POST   /projects/{projectName}/scenarios                         -> create_scenario
/// GET    /projects/{projectName}/scenarios/{scenarioName}          -> get_scenario
/// PUT    /projects/{projectName}/scenarios/{scenarioName}          -> update_scenario
/// DELETE /projects/{projectName}/scenarios/{scenarioName}          -> delete_scenario
/// GET    .../{scenarioName}/notifications                          -> get_scenario_notifications
/// POST   .../{scenarioName}/notifications                          -> create_scenario_notification
/// DELETE .../{scenarioName}/notifications/{notificationId}         -> delete_scenario_notification
/// GET    .../{scenarioName}/trends                                 -> get_scenario_trends
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            SCENARIOS_PATH,
            get(scenario::get_scenarios).post(scenario::create_scenario),
        )
        .route(
            SCENARIO_PATH,
            get(scenario::get_scenario)
                .put(scenario::update_scenario)
                .delete(scenario::delete_scenario),
        )
        .route(
            NOTIFICATIONS_PATH,
            get(scenario_notification::get_scenario_notifications)
                .post(scenario_notification::create_scenario_notification),
        )
        .route(
            NOTIFICATION_PATH,
            delete(scenario_notification::delete_scenario_notification),
        )
        .route(TRENDS_PATH, get(scenario_trends::get_scenario_trends))
}
