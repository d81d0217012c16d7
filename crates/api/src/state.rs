use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool. Each repository call checks a connection out
    /// and returns it when the call completes.
    pub pool: agency_db::DbPool,
    /// Server configuration, including the admin credentials.
    pub config: Arc<ServerConfig>,
}
