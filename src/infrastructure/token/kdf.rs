//! Key derivation
//!
//! Maps the shared secret string into a fixed-length symmetric key with
//! scrypt, so brute-forcing the secret from a leaked key stays
//! expensive. The salt is a fixed constant: derivation is deterministic
//! per secret and the derived key can be cached for the secret's
//! lifetime. Per-token diversity comes from the cipher IV, not the KDF.

use scrypt::{scrypt, Params};

use crate::domain::TokenError;

/// Fixed key-derivation salt. Not per-token; see module docs.
pub const KEY_DERIVATION_SALT: &str = "salt";

/// AES key sizes the cipher accepts, in bytes.
pub const SUPPORTED_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

// scrypt cost parameters: N = 2^14, r = 8, p = 1
const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Derive a `key_length`-byte symmetric key from the secret.
///
/// Rejects key lengths the cipher does not accept rather than silently
/// producing a key of the wrong size.
pub fn derive_key(secret: &str, key_length: usize) -> Result<Vec<u8>, TokenError> {
    if !SUPPORTED_KEY_LENGTHS.contains(&key_length) {
        return Err(TokenError::configuration(format!(
            "key length {} is not a supported AES key size (16, 24 or 32 bytes)",
            key_length
        )));
    }

    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, key_length)
        .map_err(|e| TokenError::configuration(format!("invalid scrypt parameters: {}", e)))?;

    let mut key = vec![0u8; key_length];
    scrypt(
        secret.as_bytes(),
        KEY_DERIVATION_SALT.as_bytes(),
        &params,
        &mut key,
    )
    .map_err(|e| TokenError::configuration(format!("key derivation failed: {}", e)))?;

    Ok(key)
}
