//! Administrator credential model.

use sqlx::FromRow;
use orphanage_core::types::{DbId, Timestamp};

/// A row from the `admins` table.
///
/// Deliberately not `Serialize`: the hash never leaves the server.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for inserting an administrator. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub username: String,
    pub password_hash: String,
}
