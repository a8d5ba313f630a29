//! Book handlers: list, read, create, delete.

use crate::error::AppError;
use crate::extractors::BookJson;
use crate::model::{Book, NewBook};
use crate::service::{validate_new_book, BookService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Path ids are unsigned integers that must also fit the store's signed 64-bit key.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    let n: u64 = id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))?;
    i64::try_from(n).map_err(|_| AppError::BadRequest(format!("id out of range: {}", n)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = BookService::list(&state.pool).await?;
    Ok(Json(books))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Book>, AppError> {
    let id = parse_id(&id_str)?;
    let book = BookService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("book {}", id)))?;
    Ok(Json(book))
}

pub async fn create(
    State(state): State<AppState>,
    BookJson(body): BookJson<NewBook>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    validate_new_book(&body)?;
    let book = BookService::create(&state.pool, &body).await?;
    tracing::info!(id = book.id, title = %book.title, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    BookService::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("book {}", id)))?;
    tracing::info!(id, "book deleted");
    Ok(StatusCode::OK)
}
