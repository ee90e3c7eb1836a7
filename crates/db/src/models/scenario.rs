//! Scenario entity model and its default settings.

use reporter_core::schema::CreateScenario;
use reporter_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub const DEFAULT_ANALYSIS_ENABLED: bool = true;
pub const DEFAULT_THRESHOLD_ENABLED: bool = false;
/// Default tolerated degradation, in percent, for each threshold.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 5.0;
/// `0` keeps test runs forever.
pub const DEFAULT_KEEP_TEST_RUNS_PERIOD: i32 = 0;
pub const DEFAULT_DELETE_SAMPLES: bool = false;

/// A row from the `scenarios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub analysis_enabled: bool,
    pub threshold_enabled: bool,
    pub threshold_error_rate: f64,
    pub threshold_throughput: f64,
    pub threshold_percentile: f64,
    pub keep_test_runs_period: i32,
    pub delete_samples: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Settings of a new scenario after defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSettings {
    pub analysis_enabled: bool,
    pub threshold_enabled: bool,
    pub threshold_error_rate: f64,
    pub threshold_throughput: f64,
    pub threshold_percentile: f64,
    pub keep_test_runs_period: i32,
    pub delete_samples: bool,
}

impl From<&CreateScenario> for ScenarioSettings {
    fn from(input: &CreateScenario) -> Self {
        Self {
            analysis_enabled: input.analysis_enabled.unwrap_or(DEFAULT_ANALYSIS_ENABLED),
            threshold_enabled: input.threshold_enabled.unwrap_or(DEFAULT_THRESHOLD_ENABLED),
            threshold_error_rate: input
                .threshold_error_rate
                .unwrap_or(DEFAULT_THRESHOLD_PERCENT),
            threshold_throughput: input
                .threshold_throughput
                .unwrap_or(DEFAULT_THRESHOLD_PERCENT),
            threshold_percentile: input
                .threshold_percentile
                .unwrap_or(DEFAULT_THRESHOLD_PERCENT),
            keep_test_runs_period: input
                .keep_test_runs_period
                .unwrap_or(DEFAULT_KEEP_TEST_RUNS_PERIOD),
            delete_samples: input.delete_samples.unwrap_or(DEFAULT_DELETE_SAMPLES),
        }
    }
}
