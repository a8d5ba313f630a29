//! Apply the book schema to the database.
//! `created_at`/`updated_at` are audit columns; `deleted_at` marks soft-deleted rows.

use crate::error::AppError;
use sqlx::SqlitePool;

pub const BOOKS_TABLE: &str = "books";

/// Create the books table and its index. Idempotent (IF NOT EXISTS).
/// `AUTOINCREMENT` keeps ids monotonic: an id is never handed out twice, even after delete.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        )
        "#,
        BOOKS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_{0}_deleted_at ON {0} (deleted_at)",
        BOOKS_TABLE
    ))
    .execute(pool)
    .await?;
    tracing::info!(table = BOOKS_TABLE, "schema migrated");
    Ok(())
}
