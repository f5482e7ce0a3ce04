//! Handlers for the `/donations` resource.
//!
//! Donations are append-only; there are no update or delete handlers.

use axum::extract::State;
use axum::http::StatusCode;
use orphanage_core::types::DbId;
use orphanage_db::models::donation::{CreateDonation, Donation, DonationListItem};
use orphanage_db::repositories::DonationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::response::CreatedResponse;
use crate::state::AppState;

/// GET /api/donations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DonationListItem>>> {
    let donations = DonationRepo::list(&state.pool).await?;
    Ok(Json(donations))
}

/// GET /api/donations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Donation>> {
    let donation = DonationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Donation", id))?;
    Ok(Json(donation))
}

/// POST /api/donations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDonation>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let donation = DonationRepo::create(&state.pool, &input).await?;
    tracing::info!(donation_id = donation.id, amount = donation.amount, "Donation recorded");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: donation.id,
            message: "Donation added successfully",
        }),
    ))
}
