//! Service-level routes: root greeting, liveness, readiness, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    alive: bool,
}

/// Readiness depends only on the book store answering.
#[derive(Serialize)]
struct Readiness {
    ready: bool,
    store: &'static str,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn hello() -> &'static str {
    "Hello World"
}

async fn health() -> Json<Liveness> {
    Json(Liveness { alive: true })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(Readiness {
                ready: true,
                store: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "book store not reachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    ready: false,
                    store: "unavailable",
                }),
            )
        }
    }
}

async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Routes that need no store: GET /, GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/version", get(version))
}

/// `common_routes` plus GET /ready, which checks the store.
pub fn common_routes_with_ready(state: AppState) -> Router {
    common_routes().merge(Router::new().route("/ready", get(ready)).with_state(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::open_in_memory;

    #[tokio::test]
    async fn ready_reports_closed_store_as_unavailable() {
        let pool = open_in_memory().await.unwrap();
        pool.close().await;
        let (status, Json(body)) = ready(State(AppState::new(pool))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!body.ready);
        assert_eq!(body.store, "unavailable");
    }
}
