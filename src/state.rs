//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Handed to every handler through `axum::extract::State`; the pool is the only store handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
