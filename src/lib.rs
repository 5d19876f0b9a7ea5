//! tokenseal
//!
//! A sealed-identity-token service: a lightweight alternative to
//! signed-and-encrypted session tokens. An identity (user, role, access
//! level) is serialized, encrypted under a scrypt-derived AES-CBC key
//! with a fresh random IV, signed with HMAC-SHA256 and shipped as an
//! opaque, tamper-evident, time-limited token string - no server-side
//! session storage involved.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{Identity, Role, TokenError};
pub use infrastructure::token::{SigningMode, TokenCodec, TokenCodecConfig};
