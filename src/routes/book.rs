//! Book routes, mounted under `BOOK_PREFIX`.

use crate::handlers::book::{create, delete as delete_handler, list, read};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const BOOK_PREFIX: &str = "/api/v1/book";

/// `GET`/`POST` on the collection, `GET`/`DELETE /:id` on one book, all under `BOOK_PREFIX`.
/// The collection answers both with and without a trailing slash.
pub fn book_routes(state: AppState) -> Router {
    let resource = Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(read).delete(delete_handler));
    Router::new()
        .nest(BOOK_PREFIX, resource)
        .route(&format!("{}/", BOOK_PREFIX), get(list).post(create))
        .with_state(state)
}
