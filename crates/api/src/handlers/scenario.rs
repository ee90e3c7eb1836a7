//! Handlers for `/projects/{projectName}/scenarios`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reporter_core::error::CoreError;
use reporter_core::schema::{CreateScenario, ProjectNameParam, ScenarioParams, UpdateScenario};
use reporter_db::models::scenario::Scenario;

use super::{load_project, load_scenario};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{Authorized, ReadAccess, WriteAccess};
use crate::middleware::validate::{ValidatedJson, ValidatedPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/projects/{projectName}/scenarios
pub async fn get_scenarios(
    _auth: Authorized<ReadAccess>,
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<ProjectNameParam>,
) -> AppResult<Json<DataResponse<Vec<Scenario>>>> {
    let project = load_project(&state, &params.project_name).await?;
    let scenarios = state.store.list_scenarios(project.id).await?;
    Ok(Json(DataResponse { data: scenarios }))
}

/// POST /api/projects/{projectName}/scenarios
///
/// Returns 409 if the project already has a scenario with that name.
pub async fn create_scenario(
    auth: Authorized<WriteAccess>,
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<ProjectNameParam>,
    ValidatedJson(input): ValidatedJson<CreateScenario>,
) -> AppResult<(StatusCode, Json<DataResponse<Scenario>>)> {
    let project = load_project(&state, &params.project_name).await?;
    let scenario = state.store.create_scenario(project.id, &input).await?;

    tracing::info!(
        user_id = auth.user.user_id,
        project = %project.name,
        scenario = %scenario.name,
        "Scenario created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: scenario })))
}

/// GET /api/projects/{projectName}/scenarios/{scenarioName}
pub async fn get_scenario(
    _auth: Authorized<ReadAccess>,
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<ScenarioParams>,
) -> AppResult<Json<DataResponse<Scenario>>> {
    let scenario = load_scenario(&state, &params).await?;
    Ok(Json(DataResponse { data: scenario }))
}

/// PUT /api/projects/{projectName}/scenarios/{scenarioName}
///
/// Applies the present fields; renaming onto an existing name is a 409.
pub async fn update_scenario(
    auth: Authorized<WriteAccess>,
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<ScenarioParams>,
    ValidatedJson(input): ValidatedJson<UpdateScenario>,
) -> AppResult<Json<DataResponse<Scenario>>> {
    let scenario = load_scenario(&state, &params).await?;
    let updated = state
        .store
        .update_scenario(scenario.id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Scenario", &params.scenario_name)))?;

    tracing::info!(
        user_id = auth.user.user_id,
        scenario_id = updated.id,
        scenario = %updated.name,
        "Scenario updated"
    );

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/projects/{projectName}/scenarios/{scenarioName}
pub async fn delete_scenario(
    auth: Authorized<WriteAccess>,
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<ScenarioParams>,
) -> AppResult<StatusCode> {
    let scenario = load_scenario(&state, &params).await?;
    if !state.store.delete_scenario(scenario.id).await? {
        return Err(AppError::Core(CoreError::not_found(
            "Scenario",
            &params.scenario_name,
        )));
    }

    tracing::info!(
        user_id = auth.user.user_id,
        scenario_id = scenario.id,
        "Scenario deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
