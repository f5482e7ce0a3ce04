//! Repository for the `donations` table.
//!
//! Append-only: there is no update or delete.

use orphanage_core::types::DbId;
use sqlx::PgPool;

use crate::models::donation::{CreateDonation, Donation, DonationListItem};

const COLUMNS: &str = "id, donor_name, amount, donation_date, donation_type, \
                       purpose, email, phone, address";

const LIST_COLUMNS: &str =
    "id, donor_name, amount, donation_date, donation_type, purpose, email";

pub struct DonationRepo;

impl DonationRepo {
    /// Record a donation, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDonation) -> Result<Donation, sqlx::Error> {
        let query = format!(
            "INSERT INTO donations
                (donor_name, amount, donation_type, purpose, email, phone, address)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(&input.donor_name)
            .bind(input.amount)
            .bind(&input.donation_type)
            .bind(&input.purpose)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Donation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donations WHERE id = $1");
        sqlx::query_as::<_, Donation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every donation in insertion order, without contact details.
    pub async fn list(pool: &PgPool) -> Result<Vec<DonationListItem>, sqlx::Error> {
        let query = format!("SELECT {LIST_COLUMNS} FROM donations ORDER BY id ASC");
        sqlx::query_as::<_, DonationListItem>(&query)
            .fetch_all(pool)
            .await
    }
}
