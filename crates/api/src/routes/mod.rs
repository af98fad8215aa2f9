pub mod communities;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /communities                 list, create
/// /communities/{id}            get, update (PATCH/PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/communities", communities::router())
}
