//! Partial-update merging.
//!
//! Update DTOs carry one `Option<T>` per mutable column. `None` means the
//! client did not send the field (or sent `null`) and the stored value is
//! kept; `Some(v)` replaces it, including `Some(String::new())`, so an
//! explicit empty string clears a text field instead of being ignored.

/// Replace `current` with `incoming` when a value was supplied.
pub fn merge<T>(current: &mut T, incoming: Option<T>) {
    if let Some(value) = incoming {
        *current = value;
    }
}

/// A stored record that can absorb a partial update DTO.
pub trait ApplyUpdate<U> {
    /// Merge every supplied field of `update` into `self`.
    fn apply_update(&mut self, update: U);
}
