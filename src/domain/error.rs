use thiserror::Error;

/// Errors surfaced by the token codec.
///
/// The codec never recovers internally from any of these: every failure
/// is a terminal, typed rejection. Cryptographic failures are not
/// transient, so there are no retries. The API layer collapses all of
/// them into one uniform rejection; the distinct kinds exist for
/// logging and tests.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Missing input: {message}")]
    MissingInput { message: String },

    #[error("Cipher error: {message}")]
    Cipher { message: String },

    #[error("Integrity error: signature does not match expected signature")]
    Integrity,

    #[error("Token lacks an expiration timestamp")]
    MissingExpiration,

    #[error("Token is expired")]
    Expired,

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TokenError {
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput {
            message: message.into(),
        }
    }

    pub fn cipher(message: impl Into<String>) -> Self {
        Self::Cipher {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
