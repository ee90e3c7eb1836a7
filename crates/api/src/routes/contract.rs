//! Route definition for provider-state setup used by contract tests.

use axum::routing::post;
use axum::Router;

use crate::handlers::contract;
use crate::state::AppState;

/// ```text
/// POST   /contract/states   -> set_state
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/contract/states", post(contract::set_state))
}
