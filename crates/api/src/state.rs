use std::sync::Arc;

use neoscope_neows::NeoDataSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The store pool and the upstream data source are injected here at
/// startup and passed down explicitly; nothing is process-global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: neoscope_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upstream NeoWs data source.
    pub neo: Arc<dyn NeoDataSource>,
}
