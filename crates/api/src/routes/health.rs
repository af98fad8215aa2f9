//! Service health routes, mounted at the root rather than under `/api`.
//!
//! `/health` always answers 200 and reports database reachability in the
//! body. `/up` is the load-balancer check: 200 when the database answers,
//! 503 otherwise.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
}

async fn current_health(state: &AppState) -> HealthResponse {
    let db_healthy = communities_db::health_check(&state.pool).await.is_ok();

    HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(current_health(&state).await)
}

/// GET /up
async fn up(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let health = current_health(&state).await;
    let status = if health.db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(health))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/up", get(up))
}
