//! Handlers for the `/orphans` resource.

use axum::extract::State;
use axum::http::StatusCode;
use orphanage_core::types::DbId;
use orphanage_db::models::orphan::{CreateOrphan, Orphan, OrphanSummary, UpdateOrphan};
use orphanage_db::repositories::OrphanRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Orphan";

/// GET /api/orphans
///
/// List view; omits `background`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<OrphanSummary>>> {
    let orphans = OrphanRepo::list(&state.pool).await?;
    Ok(Json(orphans))
}

/// GET /api/orphans/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Orphan>> {
    let orphan = OrphanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(orphan))
}

/// POST /api/orphans
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrphan>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let orphan = OrphanRepo::create(&state.pool, &input).await?;
    tracing::info!(orphan_id = orphan.id, "Orphan created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: orphan.id,
            message: "Orphan added successfully",
        }),
    ))
}

/// PUT /api/orphans/{id}
///
/// Partial update: fields absent from the body keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrphan>,
) -> AppResult<Json<MessageResponse>> {
    OrphanRepo::update(&state.pool, id, input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(orphan_id = id, "Orphan updated");
    Ok(Json(MessageResponse::new("Orphan updated successfully")))
}

/// DELETE /api/orphans/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !OrphanRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(orphan_id = id, "Orphan deleted");
    Ok(Json(MessageResponse::new("Orphan deleted successfully")))
}
