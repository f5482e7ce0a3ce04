//! Row structs (`FromRow + Serialize`) and request DTOs (`Deserialize`).

pub mod admin;
pub mod dashboard;
pub mod donation;
pub mod member;
pub mod orphan;
