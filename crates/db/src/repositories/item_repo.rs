//! Repository for the `items` table (recorded test runs).

use reporter_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{Item, NewItem, TrendPoint};

const COLUMNS: &str = "id, scenario_id, start_time, avg_response_time, percentile_90, \
     error_rate, throughput, max_vu, created_at";

pub struct ItemRepo;

impl ItemRepo {
    pub async fn create(
        pool: &PgPool,
        scenario_id: DbId,
        input: &NewItem,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (scenario_id, start_time, avg_response_time, percentile_90,
                error_rate, throughput, max_vu)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(scenario_id)
            .bind(input.start_time)
            .bind(input.avg_response_time)
            .bind(input.percentile_90)
            .bind(input.error_rate)
            .bind(input.throughput)
            .bind(input.max_vu)
            .fetch_one(pool)
            .await
    }

    /// The latest `limit` runs of a scenario, returned oldest first.
    pub async fn trends(
        pool: &PgPool,
        scenario_id: DbId,
        limit: i64,
    ) -> Result<Vec<TrendPoint>, sqlx::Error> {
        sqlx::query_as::<_, TrendPoint>(
            "SELECT item_id, start_time, avg_response_time, percentile_90,
                    error_rate, throughput, max_vu
             FROM (
                SELECT id AS item_id, start_time, avg_response_time, percentile_90,
                       error_rate, throughput, max_vu
                FROM items
                WHERE scenario_id = $1
                ORDER BY start_time DESC, id DESC
                LIMIT $2
             ) latest
             ORDER BY start_time ASC, item_id ASC",
        )
        .bind(scenario_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
