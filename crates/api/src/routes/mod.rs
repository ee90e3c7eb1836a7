pub mod contract;
pub mod health;
pub mod scenario;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects/{projectName}/scenarios                                         list, create
/// /projects/{projectName}/scenarios/{scenarioName}                          get, update, delete
/// /projects/{projectName}/scenarios/{scenarioName}/notifications            list, create
/// /projects/{projectName}/scenarios/{scenarioName}/notifications/{id}       delete
/// /projects/{projectName}/scenarios/{scenarioName}/trends                   get
///
/// /contract/states                                  set provider state (opt-in, POST)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    let routes = Router::new().merge(scenario::router());

    if config.contract_states_enabled {
        tracing::warn!("Contract state endpoint enabled; do not use in production");
        routes.merge(contract::router())
    } else {
        routes
    }
}
