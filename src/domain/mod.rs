//! Domain layer - Core entities and the codec error taxonomy

pub mod error;
pub mod expiration;
pub mod identity;

pub use error::TokenError;
pub use expiration::{now_epoch_secs, parse_duration};
pub use identity::{validate_user, Identity, IdentityValidationError, Payload, Role};
