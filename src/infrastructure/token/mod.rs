//! Token codec infrastructure
//!
//! Key derivation, the payload cipher, ciphertext signing and the codec
//! that composes them.

mod cipher;
mod codec;
mod kdf;
mod signer;

pub use cipher::{random_iv, IV_SIZE};
pub use codec::{SigningMode, TokenCodec, TokenCodecConfig, DEFAULT_EXPIRATION, DEFAULT_KEY_LENGTH};
pub use kdf::{derive_key, KEY_DERIVATION_SALT, SUPPORTED_KEY_LENGTHS};
pub use signer::TokenSigner;
