// src/state.rs
use crate::config::Config;
use sqlx::SqlitePool;
use std::sync::Arc;

// Estado partilhado por todos os handlers (clonado a cada request)
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: Config) -> Self {
        Self {
            db_pool,
            config: Arc::new(config),
        }
    }
}

