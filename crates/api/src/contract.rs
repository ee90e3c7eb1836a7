//! Named provider states for consumer-driven contract tests.
//!
//! Each state wipes the store and seeds a known fixture so the consumer's
//! interactions can be replayed against real handlers.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, TimeZone, Utc};
use reporter_core::notification::NotificationType;
use reporter_core::schema::{CreateNotification, CreateScenario};
use reporter_db::models::item::NewItem;
use reporter_db::{Store, StoreResult};

pub const FIXTURE_PROJECT: &str = "test-project";
pub const FIXTURE_SCENARIO: &str = "test-scenario";

/// Number of runs seeded by [`ProviderState::ScenarioTrendsExist`].
const FIXTURE_RUNS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    Clean,
    ProjectExists,
    ScenarioExists,
    ScenarioNotificationExists,
    ScenarioTrendsExist,
}

impl ProviderState {
    pub const ALL: [ProviderState; 5] = [
        ProviderState::Clean,
        ProviderState::ProjectExists,
        ProviderState::ScenarioExists,
        ProviderState::ScenarioNotificationExists,
        ProviderState::ScenarioTrendsExist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProviderState::Clean => "clean state",
            ProviderState::ProjectExists => "project exists",
            ProviderState::ScenarioExists => "scenario exists",
            ProviderState::ScenarioNotificationExists => "scenario notification exists",
            ProviderState::ScenarioTrendsExist => "scenario trends exist",
        }
    }
}

impl fmt::Display for ProviderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| format!("Unknown provider state '{s}'"))
    }
}

/// Reset `store` and seed the fixture for `state`.
///
/// The reset and each insert are separate store calls, not one transaction.
/// If seeding fails partway the store is left empty or partly seeded; apply
/// the state again to recover.
pub async fn apply(store: &dyn Store, state: ProviderState) -> StoreResult<()> {
    store.reset().await?;
    if state == ProviderState::Clean {
        return Ok(());
    }

    let project = store.create_project(FIXTURE_PROJECT).await?;
    if state == ProviderState::ProjectExists {
        return Ok(());
    }

    let scenario = store
        .create_scenario(project.id, &CreateScenario::named(FIXTURE_SCENARIO))
        .await?;

    match state {
        ProviderState::ScenarioNotificationExists => {
            store
                .create_notification(
                    scenario.id,
                    &CreateNotification {
                        name: "fixture channel".to_string(),
                        url: "https://hooks.example.com/fixture".to_string(),
                        notification_type: NotificationType::MsTeams,
                    },
                )
                .await?;
        }
        ProviderState::ScenarioTrendsExist => {
            let base = Utc
                .with_ymd_and_hms(2026, 1, 1, 12, 0, 0)
                .single()
                .unwrap_or_else(Utc::now);
            for run in 0..FIXTURE_RUNS {
                let run_f = run as f64;
                store
                    .record_item(
                        scenario.id,
                        &NewItem {
                            start_time: base + Duration::days(run),
                            avg_response_time: 120.0 + 10.0 * run_f,
                            percentile_90: 250.0 + 15.0 * run_f,
                            error_rate: 0.5 * run_f,
                            throughput: 80.0 + run_f,
                            max_vu: 20,
                        },
                    )
                    .await?;
            }
        }
        _ => {}
    }
    Ok(())
}
