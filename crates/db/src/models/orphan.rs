//! Orphan entity model and DTOs.

use orphanage_core::patch::{merge, ApplyUpdate};
use orphanage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full row from the `orphans` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Orphan {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub date_joined: Timestamp,
    pub medical_condition: String,
    pub education_level: String,
    pub background: String,
    pub photo_url: String,
    pub is_adopted: bool,
}

/// List view of an orphan. Omits the free-text `background`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrphanSummary {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub date_joined: Timestamp,
    pub medical_condition: String,
    pub education_level: String,
    pub is_adopted: bool,
    pub photo_url: String,
}

/// DTO for creating an orphan. Optional text fields default to `""`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrphan {
    pub name: String,
    pub age: i32,
    pub gender: String,
    #[serde(default)]
    pub medical_condition: String,
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub is_adopted: bool,
}

/// DTO for a partial orphan update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrphan {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub medical_condition: Option<String>,
    pub education_level: Option<String>,
    pub background: Option<String>,
    pub photo_url: Option<String>,
    pub is_adopted: Option<bool>,
}

impl ApplyUpdate<UpdateOrphan> for Orphan {
    fn apply_update(&mut self, update: UpdateOrphan) {
        merge(&mut self.name, update.name);
        merge(&mut self.age, update.age);
        merge(&mut self.gender, update.gender);
        merge(&mut self.medical_condition, update.medical_condition);
        merge(&mut self.education_level, update.education_level);
        merge(&mut self.background, update.background);
        merge(&mut self.photo_url, update.photo_url);
        merge(&mut self.is_adopted, update.is_adopted);
    }
}
