//! SQLite pool setup. The database file is created on first start.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool for `config.database_url`, creating the database file if it does not exist.
pub async fn open_pool(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    tracing::info!(url = %config.database_url, max_connections = config.max_connections, "database connected");
    Ok(pool)
}

/// Single-connection in-memory pool. Every connection to `:memory:` is its own database,
/// so the pool is pinned to one connection that is never recycled.
pub async fn open_in_memory() -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}
