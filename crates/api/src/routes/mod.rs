pub mod auth;
pub mod dashboard;
pub mod donation;
pub mod health;
pub mod member;
pub mod orphan;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                   login (POST)
///
/// /orphans                 list, create
/// /orphans/{id}            get, update, delete
///
/// /donations               list, create
/// /donations/{id}          get
///
/// /members                 list, create
/// /members/{id}            get, update, delete
///
/// /dashboard/stats         aggregate statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/orphans", orphan::router())
        .nest("/donations", donation::router())
        .nest("/members", member::router())
        .nest("/dashboard", dashboard::router())
}
