//! First-run administrator provisioning.
//!
//! Runs once at startup after migrations. If an administrator already
//! exists nothing happens; otherwise the operator must supply
//! `ADMIN_PASSWORD` and the account is created from it.

use orphanage_core::error::CoreError;
use orphanage_core::provisioning::AdminCredential;
use orphanage_db::models::admin::CreateAdmin;
use orphanage_db::repositories::AdminRepo;
use orphanage_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

/// What [`provision_admin`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// An administrator was already present; the seed was ignored.
    AlreadyProvisioned,
    /// A new administrator row was created with this username.
    Created { username: String },
}

/// Ensure an administrator exists, creating one from `seed` if needed.
///
/// Fails when no administrator exists and the seed carries no password,
/// or when the supplied credential is too weak.
pub async fn provision_admin(pool: &DbPool, seed: &AdminSeed) -> AppResult<ProvisionOutcome> {
    if AdminRepo::any_exists(pool).await? {
        tracing::info!("Administrator already provisioned");
        return Ok(ProvisionOutcome::AlreadyProvisioned);
    }

    let password = seed.password.as_deref().ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "No administrator exists and ADMIN_PASSWORD is not set".into(),
        ))
    })?;
    let credential = AdminCredential::new(seed.username.as_str(), password)?;

    let password_hash = hash_password(credential.password())
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        pool,
        &CreateAdmin {
            username: credential.username().to_string(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, username = %admin.username, "Administrator provisioned");
    Ok(ProvisionOutcome::Created {
        username: admin.username,
    })
}
