//! Book API: REST CRUD for a single book resource over SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Book, NewBook};
pub use routes::{book_routes, common_routes, common_routes_with_ready, BOOK_PREFIX};
pub use service::BookService;
pub use state::AppState;
pub use store::{open_in_memory, open_pool};

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router: common routes at the root, books under `BOOK_PREFIX`,
/// with a request-body limit and per-request tracing spans.
/// `body_limit_bytes` also replaces axum's 2 MiB extractor default.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(book_routes(state))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
