//! Handler for `/projects/{projectName}/scenarios/{scenarioName}/trends`.

use axum::extract::State;
use axum::Json;
use reporter_core::schema::ScenarioParams;
use reporter_db::models::item::{TrendPoint, TREND_WINDOW};

use super::load_scenario;
use crate::error::AppResult;
use crate::middleware::rbac::{Authorized, ReadAccess};
use crate::middleware::validate::ValidatedPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET .../scenarios/{scenarioName}/trends
///
/// The latest runs of the scenario, oldest first.
pub async fn get_scenario_trends(
    _auth: Authorized<ReadAccess>,
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<ScenarioParams>,
) -> AppResult<Json<DataResponse<Vec<TrendPoint>>>> {
    let scenario = load_scenario(&state, &params).await?;
    let points = state.store.list_trends(scenario.id, TREND_WINDOW).await?;
    Ok(Json(DataResponse { data: points }))
}
