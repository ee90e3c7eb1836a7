//! Handlers for `/projects/{projectName}/scenarios/{scenarioName}/notifications`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reporter_core::error::CoreError;
use reporter_core::schema::{CreateNotification, NotificationParams, ScenarioParams};
use reporter_db::models::notification::ScenarioNotification;

use super::load_scenario;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{Authorized, ReadAccess, WriteAccess};
use crate::middleware::validate::{ValidatedJson, ValidatedPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET .../scenarios/{scenarioName}/notifications
pub async fn get_scenario_notifications(
    _auth: Authorized<ReadAccess>,
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<ScenarioParams>,
) -> AppResult<Json<DataResponse<Vec<ScenarioNotification>>>> {
    let scenario = load_scenario(&state, &params).await?;
    let notifications = state.store.list_notifications(scenario.id).await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// POST .../scenarios/{scenarioName}/notifications
pub async fn create_scenario_notification(
    auth: Authorized<WriteAccess>,
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<ScenarioParams>,
    ValidatedJson(input): ValidatedJson<CreateNotification>,
) -> AppResult<(StatusCode, Json<DataResponse<ScenarioNotification>>)> {
    let scenario = load_scenario(&state, &params).await?;
    let notification = state.store.create_notification(scenario.id, &input).await?;

    tracing::info!(
        user_id = auth.user.user_id,
        scenario_id = scenario.id,
        notification_id = notification.id,
        kind = %input.notification_type,
        "Scenario notification created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: notification }),
    ))
}

/// DELETE .../scenarios/{scenarioName}/notifications/{notificationId}
///
/// 404 unless the notification belongs to the addressed scenario.
pub async fn delete_scenario_notification(
    auth: Authorized<WriteAccess>,
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<NotificationParams>,
) -> AppResult<StatusCode> {
    let scenario_params = ScenarioParams {
        project_name: params.project_name,
        scenario_name: params.scenario_name,
    };
    let scenario = load_scenario(&state, &scenario_params).await?;

    let deleted = state
        .store
        .delete_notification(scenario.id, params.notification_id)
        .await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found(
            "Notification",
            params.notification_id,
        )));
    }

    tracing::info!(
        user_id = auth.user.user_id,
        scenario_id = scenario.id,
        notification_id = params.notification_id,
        "Scenario notification deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
