//! User-identifier validation

use thiserror::Error;

/// Errors that can occur while validating a user identifier
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdentityValidationError {
    #[error("User identifier cannot be empty")]
    EmptyUser,

    #[error("User identifier exceeds maximum length of {0} characters")]
    TooLong(usize),

    #[error("User identifier contains invalid character: '{0}'")]
    InvalidCharacter(char),
}

const MAX_USER_LENGTH: usize = 100;

/// Validate a user identifier
///
/// Rules:
/// - Cannot be empty
/// - Maximum 100 characters
/// - Printable ASCII only, no whitespace
pub fn validate_user(user: &str) -> Result<(), IdentityValidationError> {
    if user.is_empty() {
        return Err(IdentityValidationError::EmptyUser);
    }

    if user.len() > MAX_USER_LENGTH {
        return Err(IdentityValidationError::TooLong(MAX_USER_LENGTH));
    }

    for c in user.chars() {
        if !c.is_ascii_graphic() {
            return Err(IdentityValidationError::InvalidCharacter(c));
        }
    }

    Ok(())
}
