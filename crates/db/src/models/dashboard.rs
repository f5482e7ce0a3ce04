//! Derived dashboard statistics. Nothing here is persisted.

use serde::Serialize;

use crate::models::donation::RecentDonation;

/// Number of donations included in [`DashboardStats::recent_donations`].
pub const RECENT_DONATIONS_LIMIT: i64 = 5;

/// Aggregate figures across the orphan and donation stores.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub orphan_count: i64,
    pub adopted_count: i64,
    pub total_donations: f64,
    /// Newest first; ties on `donation_date` are broken by higher id first.
    pub recent_donations: Vec<RecentDonation>,
}
