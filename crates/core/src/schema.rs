//! Request schemas for the scenario routes.
//!
//! Path-parameter structs are deserialized from the camelCase route captures
//! (`{projectName}`, `{scenarioName}`, `{notificationId}`); bodies use
//! camelCase keys and reject unknown fields.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::notification::NotificationType;
use crate::types::DbId;

/// Longest accepted project, scenario or notification name.
pub const MAX_NAME_LEN: u64 = 100;

/// Longest accepted scenario description.
pub const MAX_DESCRIPTION_LEN: u64 = 500;

// ---------------------------------------------------------------------------
// Path parameters
// ---------------------------------------------------------------------------

/// `/projects/{projectName}/...`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNameParam {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub project_name: String,
}

/// `/projects/{projectName}/scenarios/{scenarioName}/...`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioParams {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub project_name: String,
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub scenario_name: String,
}

/// `/projects/{projectName}/scenarios/{scenarioName}/notifications/{notificationId}`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotificationParams {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub project_name: String,
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub scenario_name: String,
    #[validate(range(min = 1))]
    pub notification_id: DbId,
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

/// Body of `POST /projects/{projectName}/scenarios`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateScenario {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    pub analysis_enabled: Option<bool>,
    pub threshold_enabled: Option<bool>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub threshold_error_rate: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub threshold_throughput: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub threshold_percentile: Option<f64>,
    /// Days to keep test runs; `0` keeps them forever.
    #[validate(range(min = 0))]
    pub keep_test_runs_period: Option<i32>,
    pub delete_samples: Option<bool>,
}

impl CreateScenario {
    /// A create request carrying only a name; every setting takes its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            analysis_enabled: None,
            threshold_enabled: None,
            threshold_error_rate: None,
            threshold_throughput: None,
            threshold_percentile: None,
            keep_test_runs_period: None,
            delete_samples: None,
        }
    }
}

/// Body of `PUT /projects/{projectName}/scenarios/{scenarioName}`.
///
/// Only the fields present are applied. An absent field and an explicit
/// `null` both leave the stored value unchanged, so `description` cannot go
/// back to null once set; send an empty string to blank it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateScenario {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: Option<String>,
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    pub analysis_enabled: Option<bool>,
    pub threshold_enabled: Option<bool>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub threshold_error_rate: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub threshold_throughput: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub threshold_percentile: Option<f64>,
    #[validate(range(min = 0))]
    pub keep_test_runs_period: Option<i32>,
    pub delete_samples: Option<bool>,
}

/// Body of `POST .../scenarios/{scenarioName}/notifications`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateNotification {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(url)]
    pub url: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
}

/// Flatten validation errors into a stable, human-readable message such as
/// `"name: length; url: url"`.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let codes: Vec<String> = errs.iter().map(|e| e.code.to_string()).collect();
            format!("{field}: {}", codes.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
