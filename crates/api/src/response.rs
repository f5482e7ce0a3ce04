//! Shared acknowledgement bodies for write endpoints.
//!
//! Create endpoints answer `{ "id": ..., "message": ... }`; update and
//! delete endpoints answer `{ "message": ... }`.

use orphanage_core::types::DbId;
use serde::Serialize;

/// Body returned with `201 Created`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub message: &'static str,
}

/// Body returned by update and delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
