//! Member (staff) entity model and DTOs.

use orphanage_core::patch::{merge, ApplyUpdate};
use orphanage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `members` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub joined_date: Timestamp,
}

/// DTO for creating a member. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
}

/// DTO for a partial member update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ApplyUpdate<UpdateMember> for Member {
    fn apply_update(&mut self, update: UpdateMember) {
        merge(&mut self.name, update.name);
        merge(&mut self.role, update.role);
        merge(&mut self.phone, update.phone);
        merge(&mut self.email, update.email);
    }
}
