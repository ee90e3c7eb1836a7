//! Scenario notification entity model.

use reporter_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `scenario_notifications` table.
///
/// `notification_type` holds the kebab-case name of a
/// [`reporter_core::notification::NotificationType`].
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioNotification {
    pub id: DbId,
    pub scenario_id: DbId,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub created_at: Timestamp,
}
