//! Repository for the `scenario_notifications` table.

use reporter_core::schema::CreateNotification;
use reporter_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::ScenarioNotification;

const COLUMNS: &str = "id, scenario_id, name, url, notification_type, created_at";

pub struct NotificationRepo;

impl NotificationRepo {
    pub async fn create(
        pool: &PgPool,
        scenario_id: DbId,
        input: &CreateNotification,
    ) -> Result<ScenarioNotification, sqlx::Error> {
        let query = format!(
            "INSERT INTO scenario_notifications (scenario_id, name, url, notification_type)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScenarioNotification>(&query)
            .bind(scenario_id)
            .bind(&input.name)
            .bind(&input.url)
            .bind(input.notification_type.as_str())
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_scenario(
        pool: &PgPool,
        scenario_id: DbId,
    ) -> Result<Vec<ScenarioNotification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scenario_notifications WHERE scenario_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, ScenarioNotification>(&query)
            .bind(scenario_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a notification scoped to its scenario. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, scenario_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM scenario_notifications WHERE id = $1 AND scenario_id = $2")
                .bind(id)
                .bind(scenario_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
