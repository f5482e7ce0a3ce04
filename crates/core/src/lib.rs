//! Domain primitives shared by the database and API crates.
//!
//! This crate performs no I/O.

pub mod error;
pub mod patch;
pub mod provisioning;
pub mod types;
