//! [`Store`] implementation backed by PostgreSQL.

use async_trait::async_trait;
use reporter_core::schema::{CreateNotification, CreateScenario, UpdateScenario};
use reporter_core::types::DbId;

use crate::models::item::{Item, NewItem, TrendPoint};
use crate::models::notification::ScenarioNotification;
use crate::models::project::Project;
use crate::models::scenario::{Scenario, ScenarioSettings};
use crate::repositories::{ItemRepo, NotificationRepo, ProjectRepo, ScenarioRepo};
use crate::store::{Store, StoreError, StoreResult};
use crate::DbPool;

/// PostgreSQL unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Turn violations of `uq_*` constraints into [`StoreError::Conflict`].
fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
                return StoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ));
            }
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl Store for PgStore {
    async fn find_project(&self, name: &str) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_by_name(&self.pool, name).await?)
    }

    async fn create_project(&self, name: &str) -> StoreResult<Project> {
        ProjectRepo::create(&self.pool, name).await.map_err(classify)
    }

    async fn list_scenarios(&self, project_id: DbId) -> StoreResult<Vec<Scenario>> {
        Ok(ScenarioRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn find_scenario(&self, project_id: DbId, name: &str) -> StoreResult<Option<Scenario>> {
        Ok(ScenarioRepo::find_by_name(&self.pool, project_id, name).await?)
    }

    async fn create_scenario(
        &self,
        project_id: DbId,
        input: &CreateScenario,
    ) -> StoreResult<Scenario> {
        let settings = ScenarioSettings::from(input);
        ScenarioRepo::create(
            &self.pool,
            project_id,
            &input.name,
            input.description.as_deref(),
            &settings,
        )
        .await
        .map_err(classify)
    }

    async fn update_scenario(
        &self,
        id: DbId,
        input: &UpdateScenario,
    ) -> StoreResult<Option<Scenario>> {
        ScenarioRepo::update(&self.pool, id, input)
            .await
            .map_err(classify)
    }

    async fn delete_scenario(&self, id: DbId) -> StoreResult<bool> {
        Ok(ScenarioRepo::delete(&self.pool, id).await?)
    }

    async fn list_notifications(
        &self,
        scenario_id: DbId,
    ) -> StoreResult<Vec<ScenarioNotification>> {
        Ok(NotificationRepo::list_by_scenario(&self.pool, scenario_id).await?)
    }

    async fn create_notification(
        &self,
        scenario_id: DbId,
        input: &CreateNotification,
    ) -> StoreResult<ScenarioNotification> {
        Ok(NotificationRepo::create(&self.pool, scenario_id, input).await?)
    }

    async fn delete_notification(&self, scenario_id: DbId, id: DbId) -> StoreResult<bool> {
        Ok(NotificationRepo::delete(&self.pool, scenario_id, id).await?)
    }

    async fn record_item(&self, scenario_id: DbId, input: &NewItem) -> StoreResult<Item> {
        Ok(ItemRepo::create(&self.pool, scenario_id, input).await?)
    }

    async fn list_trends(&self, scenario_id: DbId, limit: i64) -> StoreResult<Vec<TrendPoint>> {
        Ok(ItemRepo::trends(&self.pool, scenario_id, limit).await?)
    }

    async fn reset(&self) -> StoreResult<()> {
        sqlx::query(
            "TRUNCATE items, scenario_notifications, scenarios, projects RESTART IDENTITY CASCADE",
        )
        .execute(&self.pool)
        .await?;
        tracing::warn!("All scenario data truncated");
        Ok(())
    }
}
