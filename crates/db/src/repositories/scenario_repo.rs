//! Repository for the `scenarios` table.

use reporter_core::schema::UpdateScenario;
use reporter_core::types::DbId;
use sqlx::PgPool;

use crate::models::scenario::{Scenario, ScenarioSettings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, description, analysis_enabled, threshold_enabled, \
     threshold_error_rate, threshold_throughput, threshold_percentile, \
     keep_test_runs_period, delete_samples, created_at, updated_at";

/// Provides CRUD operations for scenarios.
pub struct ScenarioRepo;

impl ScenarioRepo {
    /// Insert a new scenario with fully resolved settings.
    ///
    /// A duplicate name within the project violates `uq_scenarios_project_name`.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        name: &str,
        description: Option<&str>,
        settings: &ScenarioSettings,
    ) -> Result<Scenario, sqlx::Error> {
        let query = format!(
            "INSERT INTO scenarios (project_id, name, description, analysis_enabled,
                threshold_enabled, threshold_error_rate, threshold_throughput,
                threshold_percentile, keep_test_runs_period, delete_samples)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scenario>(&query)
            .bind(project_id)
            .bind(name)
            .bind(description)
            .bind(settings.analysis_enabled)
            .bind(settings.threshold_enabled)
            .bind(settings.threshold_error_rate)
            .bind(settings.threshold_throughput)
            .bind(settings.threshold_percentile)
            .bind(settings.keep_test_runs_period)
            .bind(settings.delete_samples)
            .fetch_one(pool)
            .await
    }

    /// List a project's scenarios ordered by name.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Scenario>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM scenarios WHERE project_id = $1 ORDER BY name ASC");
        sqlx::query_as::<_, Scenario>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find a scenario by name within a project.
    pub async fn find_by_name(
        pool: &PgPool,
        project_id: DbId,
        name: &str,
    ) -> Result<Option<Scenario>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM scenarios WHERE project_id = $1 AND name = $2");
        sqlx::query_as::<_, Scenario>(&query)
            .bind(project_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Update a scenario. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScenario,
    ) -> Result<Option<Scenario>, sqlx::Error> {
        let query = format!(
            "UPDATE scenarios SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                analysis_enabled = COALESCE($4, analysis_enabled),
                threshold_enabled = COALESCE($5, threshold_enabled),
                threshold_error_rate = COALESCE($6, threshold_error_rate),
                threshold_throughput = COALESCE($7, threshold_throughput),
                threshold_percentile = COALESCE($8, threshold_percentile),
                keep_test_runs_period = COALESCE($9, keep_test_runs_period),
                delete_samples = COALESCE($10, delete_samples),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scenario>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.analysis_enabled)
            .bind(input.threshold_enabled)
            .bind(input.threshold_error_rate)
            .bind(input.threshold_throughput)
            .bind(input.threshold_percentile)
            .bind(input.keep_test_runs_period)
            .bind(input.delete_samples)
            .fetch_optional(pool)
            .await
    }

    /// Delete a scenario by ID. Notifications and items cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scenarios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
