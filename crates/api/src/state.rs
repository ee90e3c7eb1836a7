use std::sync::Arc;

use reporter_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Scenario persistence (PostgreSQL or in-memory).
    pub store: Arc<dyn Store>,
    /// Server configuration (JWT secret is read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
