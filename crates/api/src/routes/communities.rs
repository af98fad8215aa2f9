use axum::routing::get;
use axum::Router;

use crate::handlers::communities;
use crate::state::AppState;

/// Community routes mounted at `/communities`.
///
/// ```text
/// GET    /           -> index
/// POST   /           -> create
/// GET    /{id}       -> show
/// PATCH  /{id}       -> update
/// PUT    /{id}       -> update
/// DELETE /{id}       -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(communities::index).post(communities::create))
        .route(
            "/{id}",
            get(communities::show)
                .patch(communities::update)
                .put(communities::update)
                .delete(communities::destroy),
        )
}
