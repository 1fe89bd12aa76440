use std::sync::Arc;

use crate::config::ServerConfig;
use crate::uploads::FileStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted and the rest sits
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cms_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// On-disk store for uploaded files.
    pub files: Arc<FileStore>,
}
