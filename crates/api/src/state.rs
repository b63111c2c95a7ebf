use std::sync::Arc;

use crate::auth::token::TokenKeys;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: learning_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Signing keys for access tokens, derived from `config.token`.
    pub tokens: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(pool: learning_db::DbPool, config: ServerConfig) -> Self {
        let tokens = Arc::new(TokenKeys::new(&config.token));
        Self {
            pool,
            config: Arc::new(config),
            tokens,
        }
    }
}
