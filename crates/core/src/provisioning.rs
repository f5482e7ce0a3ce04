//! First-run administrator provisioning rules.
//!
//! The administrator account is created from an operator-supplied
//! credential when the `admins` table is empty. There is no built-in
//! fallback password.

use std::fmt;

use crate::error::CoreError;

/// Username used when the operator does not supply one.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Minimum accepted length for a provisioned administrator password.
pub const MIN_ADMIN_PASSWORD_LENGTH: usize = 8;

/// Maximum username length, matching the `admins.username` column.
pub const MAX_ADMIN_USERNAME_LENGTH: usize = 80;

/// Operator-supplied credential for the initial administrator.
///
/// `Debug` redacts the password so the value can be logged safely.
#[derive(Clone)]
pub struct AdminCredential {
    username: String,
    password: String,
}

impl AdminCredential {
    /// Build a credential, rejecting blank usernames and weak passwords.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, CoreError> {
        let username = username.into().trim().to_string();
        let password = password.into();

        if username.is_empty() {
            return Err(CoreError::Validation(
                "Administrator username must not be empty".into(),
            ));
        }
        if username.len() > MAX_ADMIN_USERNAME_LENGTH {
            return Err(CoreError::Validation(format!(
                "Administrator username must be at most {MAX_ADMIN_USERNAME_LENGTH} characters"
            )));
        }
        validate_password_strength(&password, MIN_ADMIN_PASSWORD_LENGTH)
            .map_err(CoreError::Validation)?;

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validate that a password meets minimum strength requirements.
///
/// Currently enforces a minimum character length. Returns `Ok(())` when the
/// password is acceptable, or `Err` with a human-readable explanation.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}
