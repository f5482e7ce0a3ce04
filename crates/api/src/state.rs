/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is created once in `main` (or per test by `#[sqlx::test]`) and
/// injected here; no handler reaches for a global connection.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: orphanage_db::DbPool,
}
