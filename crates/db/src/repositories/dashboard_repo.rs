//! Read-only aggregation over the `orphans` and `donations` tables.

use sqlx::PgPool;

use crate::models::dashboard::{DashboardStats, RECENT_DONATIONS_LIMIT};
use crate::models::donation::RecentDonation;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute dashboard statistics.
    ///
    /// All four queries share one repeatable-read snapshot so the counts,
    /// the sum, and the recent slice describe the same moment.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let orphan_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orphans")
            .fetch_one(&mut *tx)
            .await?;

        let adopted_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orphans WHERE is_adopted")
                .fetch_one(&mut *tx)
                .await?;

        let total_donations = sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(amount), 0)::DOUBLE PRECISION FROM donations",
        )
        .fetch_one(&mut *tx)
        .await?;

        let recent_donations = sqlx::query_as::<_, RecentDonation>(
            "SELECT id, donor_name, amount, donation_date, donation_type
             FROM donations
             ORDER BY donation_date DESC, id DESC
             LIMIT $1",
        )
        .bind(RECENT_DONATIONS_LIMIT)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(DashboardStats {
            orphan_count,
            adopted_count,
            total_donations,
            recent_donations,
        })
    }
}
