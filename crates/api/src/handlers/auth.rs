//! Handler for `POST /login`.
//!
//! Login is stateless: it checks the submitted credential and reports the
//! result. No session or token is issued.

use axum::extract::State;
use orphanage_core::error::CoreError;
use orphanage_db::repositories::AdminRepo;
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Request body for `POST /login`.
///
/// Both fields are optional at the wire level so that a missing field gets
/// the login-specific message instead of the generic `INVALID_JSON` one.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub username: String,
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (Some(username), Some(password)) = (
        input.username.filter(|s| !s.is_empty()),
        input.password.filter(|s| !s.is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "Username and password are required".into(),
        ));
    };

    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid credentials".into()));

    let admin = AdminRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!(username = %admin.username, "Rejected login");
        return Err(invalid());
    }

    tracing::info!(admin_id = admin.id, "Admin logged in");
    Ok(Json(LoginResponse {
        success: true,
        username: admin.username,
    }))
}
