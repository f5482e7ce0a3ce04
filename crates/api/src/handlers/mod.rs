pub mod auth;
pub mod dashboard;
pub mod donation;
pub mod member;
pub mod orphan;
