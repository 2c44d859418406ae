use std::sync::Arc;

use crate::config::ServerConfig;
use crate::engine::ledger::Ledger;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: adslot_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// External billing ledger the interaction engine charges into.
    /// Trait object so tests can substitute a stub ledger.
    pub ledger: Arc<dyn Ledger>,
}
