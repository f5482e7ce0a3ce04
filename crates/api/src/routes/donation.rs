//! Route definitions for the `/donations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::donation;
use crate::state::AppState;

/// Routes mounted at `/donations`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(donation::list).post(donation::create))
        .route("/{id}", get(donation::get_by_id))
}
