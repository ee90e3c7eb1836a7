//! Test-run items and the trend projection built from them.

use reporter_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Number of most recent runs returned by the trends endpoint.
pub const TREND_WINDOW: i64 = 15;

/// A row from the `items` table: the overview of one recorded test run.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DbId,
    pub scenario_id: DbId,
    pub start_time: Timestamp,
    pub avg_response_time: f64,
    pub percentile_90: f64,
    pub error_rate: f64,
    pub throughput: f64,
    pub max_vu: i32,
    pub created_at: Timestamp,
}

/// DTO for recording a test run.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub start_time: Timestamp,
    pub avg_response_time: f64,
    pub percentile_90: f64,
    pub error_rate: f64,
    pub throughput: f64,
    pub max_vu: i32,
}

/// One point on a scenario's trend chart.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub item_id: DbId,
    pub start_time: Timestamp,
    pub avg_response_time: f64,
    pub percentile_90: f64,
    pub error_rate: f64,
    pub throughput: f64,
    pub max_vu: i32,
}

impl From<&Item> for TrendPoint {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.id,
            start_time: item.start_time,
            avg_response_time: item.avg_response_time,
            percentile_90: item.percentile_90,
            error_rate: item.error_rate,
            throughput: item.throughput,
            max_vu: item.max_vu,
        }
    }
}
