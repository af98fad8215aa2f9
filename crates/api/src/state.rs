use std::sync::Arc;

use communities_db::repositories::CommunityRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and repository are handles, config is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: communities_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Repository for the community resource.
    pub communities: CommunityRepo,
}

impl AppState {
    pub fn new(pool: communities_db::DbPool, config: ServerConfig) -> Self {
        Self {
            communities: CommunityRepo::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
