//! The storage seam between HTTP handlers and persistence.

use async_trait::async_trait;
use reporter_core::schema::{CreateNotification, CreateScenario, UpdateScenario};
use reporter_core::types::DbId;

use crate::models::item::{Item, NewItem, TrendPoint};
use crate::models::notification::ScenarioNotification;
use crate::models::project::Project;
use crate::models::scenario::Scenario;

/// Errors surfaced by a [`Store`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness rule was violated (duplicate project or scenario name).
    #[error("Conflict: {0}")]
    Conflict(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations needed by the scenario routes.
///
/// Lookups return `Ok(None)` / `Ok(false)` for missing rows; deciding that a
/// miss is a 404 is left to the caller.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_project(&self, name: &str) -> StoreResult<Option<Project>>;

    async fn create_project(&self, name: &str) -> StoreResult<Project>;

    /// Scenarios of a project ordered by name.
    async fn list_scenarios(&self, project_id: DbId) -> StoreResult<Vec<Scenario>>;

    async fn find_scenario(&self, project_id: DbId, name: &str) -> StoreResult<Option<Scenario>>;

    async fn create_scenario(
        &self,
        project_id: DbId,
        input: &CreateScenario,
    ) -> StoreResult<Scenario>;

    /// Apply the present fields of `input`. Returns `None` if the scenario is gone.
    async fn update_scenario(
        &self,
        id: DbId,
        input: &UpdateScenario,
    ) -> StoreResult<Option<Scenario>>;

    /// Delete a scenario with its notifications and items.
    async fn delete_scenario(&self, id: DbId) -> StoreResult<bool>;

    /// Notifications of a scenario ordered by id.
    async fn list_notifications(&self, scenario_id: DbId)
        -> StoreResult<Vec<ScenarioNotification>>;

    async fn create_notification(
        &self,
        scenario_id: DbId,
        input: &CreateNotification,
    ) -> StoreResult<ScenarioNotification>;

    /// Delete a notification only if it belongs to `scenario_id`.
    async fn delete_notification(&self, scenario_id: DbId, id: DbId) -> StoreResult<bool>;

    async fn record_item(&self, scenario_id: DbId, input: &NewItem) -> StoreResult<Item>;

    /// The latest `limit` items of a scenario, oldest first.
    async fn list_trends(&self, scenario_id: DbId, limit: i64) -> StoreResult<Vec<TrendPoint>>;

    /// Remove every row and restart id sequences.
    async fn reset(&self) -> StoreResult<()>;
}
