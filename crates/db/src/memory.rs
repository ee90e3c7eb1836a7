//! In-process [`Store`] used when no `DATABASE_URL` is configured and by the
//! test suites.
//!
//! Mirrors the PostgreSQL schema: per-table id sequences starting at 1,
//! unique names, and cascading scenario deletes.

use async_trait::async_trait;
use chrono::Utc;
use reporter_core::schema::{CreateNotification, CreateScenario, UpdateScenario};
use reporter_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::item::{Item, NewItem, TrendPoint};
use crate::models::notification::ScenarioNotification;
use crate::models::project::Project;
use crate::models::scenario::{Scenario, ScenarioSettings};
use crate::store::{Store, StoreError, StoreResult};

#[derive(Default)]
struct Sequences {
    project: DbId,
    scenario: DbId,
    notification: DbId,
    item: DbId,
}

impl Sequences {
    fn next(counter: &mut DbId) -> DbId {
        *counter += 1;
        *counter
    }
}

#[derive(Default)]
struct Tables {
    projects: Vec<Project>,
    scenarios: Vec<Scenario>,
    notifications: Vec<ScenarioNotification>,
    items: Vec<Item>,
    seq: Sequences,
}

impl Tables {
    fn scenario_name_taken(&self, project_id: DbId, name: &str, except: Option<DbId>) -> bool {
        self.scenarios
            .iter()
            .any(|s| s.project_id == project_id && s.name == name && Some(s.id) != except)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_project(&self, name: &str) -> StoreResult<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| p.name == name).cloned())
    }

    async fn create_project(&self, name: &str) -> StoreResult<Project> {
        let mut tables = self.tables.write().await;
        if tables.projects.iter().any(|p| p.name == name) {
            return Err(StoreError::Conflict(format!(
                "Project '{name}' already exists"
            )));
        }
        let project = Project {
            id: Sequences::next(&mut tables.seq.project),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        tables.projects.push(project.clone());
        Ok(project)
    }

    async fn list_scenarios(&self, project_id: DbId) -> StoreResult<Vec<Scenario>> {
        let tables = self.tables.read().await;
        let mut scenarios: Vec<Scenario> = tables
            .scenarios
            .iter()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect();
        scenarios.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(scenarios)
    }

    async fn find_scenario(&self, project_id: DbId, name: &str) -> StoreResult<Option<Scenario>> {
        let tables = self.tables.read().await;
        Ok(tables
            .scenarios
            .iter()
            .find(|s| s.project_id == project_id && s.name == name)
            .cloned())
    }

    async fn create_scenario(
        &self,
        project_id: DbId,
        input: &CreateScenario,
    ) -> StoreResult<Scenario> {
        let mut tables = self.tables.write().await;
        if tables.scenario_name_taken(project_id, &input.name, None) {
            return Err(StoreError::Conflict(format!(
                "Scenario '{}' already exists",
                input.name
            )));
        }
        let settings = ScenarioSettings::from(input);
        let now = Utc::now();
        let scenario = Scenario {
            id: Sequences::next(&mut tables.seq.scenario),
            project_id,
            name: input.name.clone(),
            description: input.description.clone(),
            analysis_enabled: settings.analysis_enabled,
            threshold_enabled: settings.threshold_enabled,
            threshold_error_rate: settings.threshold_error_rate,
            threshold_throughput: settings.threshold_throughput,
            threshold_percentile: settings.threshold_percentile,
            keep_test_runs_period: settings.keep_test_runs_period,
            delete_samples: settings.delete_samples,
            created_at: now,
            updated_at: now,
        };
        tables.scenarios.push(scenario.clone());
        Ok(scenario)
    }

    async fn update_scenario(
        &self,
        id: DbId,
        input: &UpdateScenario,
    ) -> StoreResult<Option<Scenario>> {
        let mut tables = self.tables.write().await;
        let Some(project_id) = tables
            .scenarios
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.project_id)
        else {
            return Ok(None);
        };
        if let Some(name) = &input.name {
            if tables.scenario_name_taken(project_id, name, Some(id)) {
                return Err(StoreError::Conflict(format!(
                    "Scenario '{name}' already exists"
                )));
            }
        }

        let Some(scenario) = tables.scenarios.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &input.name {
            scenario.name = name.clone();
        }
        if let Some(description) = &input.description {
            scenario.description = Some(description.clone());
        }
        if let Some(v) = input.analysis_enabled {
            scenario.analysis_enabled = v;
        }
        if let Some(v) = input.threshold_enabled {
            scenario.threshold_enabled = v;
        }
        if let Some(v) = input.threshold_error_rate {
            scenario.threshold_error_rate = v;
        }
        if let Some(v) = input.threshold_throughput {
            scenario.threshold_throughput = v;
        }
        if let Some(v) = input.threshold_percentile {
            scenario.threshold_percentile = v;
        }
        if let Some(v) = input.keep_test_runs_period {
            scenario.keep_test_runs_period = v;
        }
        if let Some(v) = input.delete_samples {
            scenario.delete_samples = v;
        }
        scenario.updated_at = Utc::now();
        Ok(Some(scenario.clone()))
    }

    async fn delete_scenario(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.scenarios.len();
        tables.scenarios.retain(|s| s.id != id);
        if tables.scenarios.len() == before {
            return Ok(false);
        }
        tables.notifications.retain(|n| n.scenario_id != id);
        tables.items.retain(|i| i.scenario_id != id);
        Ok(true)
    }

    async fn list_notifications(
        &self,
        scenario_id: DbId,
    ) -> StoreResult<Vec<ScenarioNotification>> {
        let tables = self.tables.read().await;
        Ok(tables
            .notifications
            .iter()
            .filter(|n| n.scenario_id == scenario_id)
            .cloned()
            .collect())
    }

    async fn create_notification(
        &self,
        scenario_id: DbId,
        input: &CreateNotification,
    ) -> StoreResult<ScenarioNotification> {
        let mut tables = self.tables.write().await;
        let notification = ScenarioNotification {
            id: Sequences::next(&mut tables.seq.notification),
            scenario_id,
            name: input.name.clone(),
            url: input.url.clone(),
            notification_type: input.notification_type.as_str().to_string(),
            created_at: Utc::now(),
        };
        tables.notifications.push(notification.clone());
        Ok(notification)
    }

    async fn delete_notification(&self, scenario_id: DbId, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.notifications.len();
        tables
            .notifications
            .retain(|n| !(n.id == id && n.scenario_id == scenario_id));
        Ok(tables.notifications.len() < before)
    }

    async fn record_item(&self, scenario_id: DbId, input: &NewItem) -> StoreResult<Item> {
        let mut tables = self.tables.write().await;
        let item = Item {
            id: Sequences::next(&mut tables.seq.item),
            scenario_id,
            start_time: input.start_time,
            avg_response_time: input.avg_response_time,
            percentile_90: input.percentile_90,
            error_rate: input.error_rate,
            throughput: input.throughput,
            max_vu: input.max_vu,
            created_at: Utc::now(),
        };
        tables.items.push(item.clone());
        Ok(item)
    }

    async fn list_trends(&self, scenario_id: DbId, limit: i64) -> StoreResult<Vec<TrendPoint>> {
        let tables = self.tables.read().await;
        let mut items: Vec<&Item> = tables
            .items
            .iter()
            .filter(|i| i.scenario_id == scenario_id)
            .collect();
        // Newest first, keep the window, then flip back to chronological.
        items.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));
        items.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        items.reverse();
        Ok(items.into_iter().map(TrendPoint::from).collect())
    }

    async fn reset(&self) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        *tables = Tables::default();
        tracing::warn!("In-memory store reset");
        Ok(())
    }
}
