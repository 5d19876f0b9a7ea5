//! Infrastructure layer - cryptographic primitives and process plumbing

pub mod logging;
pub mod token;

pub use token::{SigningMode, TokenCodec, TokenCodecConfig};
