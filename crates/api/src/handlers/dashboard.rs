//! Handler for dashboard statistics.

use axum::extract::State;
use axum::Json;
use orphanage_db::models::dashboard::DashboardStats;
use orphanage_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard/stats
///
/// Recomputed on every call.
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
