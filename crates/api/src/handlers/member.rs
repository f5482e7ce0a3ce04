//! Handlers for the `/members` resource.

use axum::extract::State;
use axum::http::StatusCode;
use orphanage_core::types::DbId;
use orphanage_db::models::member::{CreateMember, Member, UpdateMember};
use orphanage_db::repositories::MemberRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Member";

/// GET /api/members
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = MemberRepo::list(&state.pool).await?;
    Ok(Json(members))
}

/// GET /api/members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Member>> {
    let member = MemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(member))
}

/// POST /api/members
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let member = MemberRepo::create(&state.pool, &input).await?;
    tracing::info!(member_id = member.id, "Member created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: member.id,
            message: "Member added successfully",
        }),
    ))
}

/// PUT /api/members/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMember>,
) -> AppResult<Json<MessageResponse>> {
    MemberRepo::update(&state.pool, id, input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(member_id = id, "Member updated");
    Ok(Json(MessageResponse::new("Member updated successfully")))
}

/// DELETE /api/members/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !MemberRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(member_id = id, "Member deleted");
    Ok(Json(MessageResponse::new("Member deleted successfully")))
}
