//! Handler for `POST /api/contract/states`.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::contract::{self, ProviderState};
use crate::error::{AppError, AppResult};
use crate::middleware::validate::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ContractStateRequest {
    #[validate(length(min = 1))]
    pub consumer: String,
    #[validate(length(min = 1))]
    pub state: String,
}

/// POST /api/contract/states
///
/// Unauthenticated; only mounted when `CONTRACT_STATES_ENABLED` is set.
pub async fn set_state(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ContractStateRequest>,
) -> AppResult<Json<DataResponse<ContractStateRequest>>> {
    let provider_state: ProviderState = input.state.parse().map_err(AppError::BadRequest)?;
    contract::apply(state.store.as_ref(), provider_state).await?;

    tracing::info!(consumer = %input.consumer, state = %provider_state, "Provider state applied");

    Ok(Json(DataResponse { data: input }))
}
