pub mod contract;
pub mod scenario;
pub mod scenario_notification;
pub mod scenario_trends;

use reporter_core::error::CoreError;
use reporter_core::schema::ScenarioParams;
use reporter_db::models::project::Project;
use reporter_db::models::scenario::Scenario;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Resolve a project by name or fail with 404.
pub(crate) async fn load_project(state: &AppState, project_name: &str) -> AppResult<Project> {
    state
        .store
        .find_project(project_name)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", project_name)))
}

/// Resolve `{projectName}/{scenarioName}` or fail with 404.
pub(crate) async fn load_scenario(state: &AppState, params: &ScenarioParams) -> AppResult<Scenario> {
    let project = load_project(state, &params.project_name).await?;
    state
        .store
        .find_scenario(project.id, &params.scenario_name)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Scenario", &params.scenario_name)))
}
