//! Donation entity model and DTOs.
//!
//! Donations are append-only, so there is no update DTO.

use orphanage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full row from the `donations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Donation {
    pub id: DbId,
    pub donor_name: String,
    pub amount: f64,
    pub donation_date: Timestamp,
    pub donation_type: String,
    pub purpose: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// List view of a donation. Omits the donor's phone and address.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DonationListItem {
    pub id: DbId,
    pub donor_name: String,
    pub amount: f64,
    pub donation_date: Timestamp,
    pub donation_type: String,
    pub purpose: String,
    pub email: String,
}

/// Dashboard view of a donation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentDonation {
    pub id: DbId,
    pub donor_name: String,
    pub amount: f64,
    pub donation_date: Timestamp,
    pub donation_type: String,
}

/// DTO for recording a donation. Optional text fields default to `""`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDonation {
    pub donor_name: String,
    pub amount: f64,
    pub donation_type: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}
