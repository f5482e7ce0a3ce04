use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use orphanage_db::repositories::AdminRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the store cannot be queried.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether an administrator account exists, i.e. login can succeed.
    pub admin_provisioned: bool,
}

/// GET /health
///
/// Probes the store through the admin table, so a reachable database with
/// missing migrations also reports as degraded. Degraded answers 503.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let probe = AdminRepo::any_exists(&state.pool).await;
    if let Err(err) = &probe {
        tracing::warn!(error = %err, "Health probe failed");
    }

    let db_healthy = probe.is_ok();
    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthResponse {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            admin_provisioned: probe.unwrap_or(false),
        }),
    )
}

/// Root-level routes, mounted outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
