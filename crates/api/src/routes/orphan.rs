//! Route definitions for the `/orphans` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::orphan;
use crate::state::AppState;

/// Routes mounted at `/orphans`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orphan::list).post(orphan::create))
        .route(
            "/{id}",
            get(orphan::get_by_id)
                .put(orphan::update)
                .delete(orphan::delete),
        )
}
