//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod dashboard_repo;
pub mod donation_repo;
pub mod member_repo;
pub mod orphan_repo;

pub use admin_repo::AdminRepo;
pub use dashboard_repo::DashboardRepo;
pub use donation_repo::DonationRepo;
pub use member_repo::MemberRepo;
pub use orphan_repo::OrphanRepo;
