//! Book CRUD against SQLite. Every operation is a single statement; soft-deleted rows are never returned.

use crate::error::AppError;
use crate::migration::BOOKS_TABLE;
use crate::model::{Book, NewBook};
use chrono::Utc;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, title, created_at, updated_at";

pub struct BookService;

impl BookService {
    /// All live books, ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Book>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL ORDER BY id",
            COLUMNS, BOOKS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Book>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one live book by id. `None` means no such record.
    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Book>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ? AND deleted_at IS NULL",
            COLUMNS, BOOKS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one book; the id is always assigned by the database. Returns the created row.
    pub async fn create(pool: &SqlitePool, book: &NewBook) -> Result<Book, AppError> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO {} (title, created_at, updated_at) VALUES (?, ?, ?) RETURNING {}",
            BOOKS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, title = %book.title, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(&book.title)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Soft-delete one live book by id. Returns the deleted row, or `None` when nothing matched
    /// (the table is left untouched in that case).
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Book>, AppError> {
        let now = Utc::now();
        let sql = format!(
            "UPDATE {} SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL RETURNING {}",
            BOOKS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(now)
            .bind(now)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
