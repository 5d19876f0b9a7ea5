//! Payload cipher: AES-CBC with PKCS#7 padding
//!
//! The key length selects the AES variant (16, 24 or 32 bytes); the
//! service default is AES-192. CBC needs a unique, unpredictable IV per
//! message, so every encryption gets a fresh random 16-byte IV which
//! travels with the ciphertext.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};
use rand::RngCore;

use crate::domain::TokenError;

/// Initialization vector size in bytes (one AES block)
pub const IV_SIZE: usize = 16;

/// Generate a cryptographically random IV
pub fn random_iv() -> [u8; IV_SIZE] {
    let mut iv = [0u8; IV_SIZE];
    rand::thread_rng().fill_bytes(&mut iv);
    iv
}

/// Encrypt a serialized payload under `key` and `iv`.
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, TokenError> {
    check_iv(iv)?;
    match key.len() {
        16 => {
            let cipher = cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(|e| TokenError::cipher(format!("invalid key or IV: {}", e)))?;
            Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        24 => {
            let cipher = cbc::Encryptor::<Aes192>::new_from_slices(key, iv)
                .map_err(|e| TokenError::cipher(format!("invalid key or IV: {}", e)))?;
            Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        32 => {
            let cipher = cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(|e| TokenError::cipher(format!("invalid key or IV: {}", e)))?;
            Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
        other => Err(TokenError::cipher(format!(
            "unsupported key length: {} bytes",
            other
        ))),
    }
}

/// Decrypt a ciphertext produced by [`encrypt`].
///
/// Fails with a cipher error on wrong key/IV sizes, ciphertexts that
/// are not a whole number of blocks, or invalid padding. Never returns
/// garbage on a detectable failure.
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, TokenError> {
    check_iv(iv)?;
    match key.len() {
        16 => {
            let cipher = cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(|e| TokenError::cipher(format!("invalid key or IV: {}", e)))?;
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| TokenError::cipher("ciphertext is malformed or padding is invalid"))
        }
        24 => {
            let cipher = cbc::Decryptor::<Aes192>::new_from_slices(key, iv)
                .map_err(|e| TokenError::cipher(format!("invalid key or IV: {}", e)))?;
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| TokenError::cipher("ciphertext is malformed or padding is invalid"))
        }
        32 => {
            let cipher = cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(|e| TokenError::cipher(format!("invalid key or IV: {}", e)))?;
            cipher
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| TokenError::cipher("ciphertext is malformed or padding is invalid"))
        }
        other => Err(TokenError::cipher(format!(
            "unsupported key length: {} bytes",
            other
        ))),
    }
}

fn check_iv(iv: &[u8]) -> Result<(), TokenError> {
    if iv.len() != IV_SIZE {
        return Err(TokenError::cipher(format!(
            "initialization vector must be {} bytes, got {}",
            IV_SIZE,
            iv.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(len: usize) -> Vec<u8> {
        (0..len as u8).collect()
    }

    #[test]
    fn test_round_trip_all_key_sizes() {
        let plaintext = br#"{"user":"john_doe","role":"admin","access_level":5}"#;
        let iv = [7u8; IV_SIZE];

        for len in [16, 24, 32] {
            let ciphertext = encrypt(plaintext, &key(len), &iv).unwrap();
            assert_ne!(&ciphertext[..], &plaintext[..]);
            // PKCS#7 always pads to a whole block
            assert_eq!(ciphertext.len() % 16, 0);

            let decrypted = decrypt(&ciphertext, &key(len), &iv).unwrap();
            assert_eq!(decrypted, plaintext);
        }
    }

    #[test]
    fn test_random_iv_is_fresh() {
        let a = random_iv();
        let b = random_iv();
        // 16 random bytes colliding is a broken RNG
        assert_ne!(a, b);
    }

    #[test]
    fn test_distinct_ivs_give_distinct_ciphertexts() {
        let plaintext = b"same plaintext";
        let a = encrypt(plaintext, &key(24), &[1u8; IV_SIZE]).unwrap();
        let b = encrypt(plaintext, &key(24), &[2u8; IV_SIZE]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrong_key_length_is_rejected() {
        let iv = [0u8; IV_SIZE];
        assert!(encrypt(b"data", &key(20), &iv).is_err());
        assert!(decrypt(&[0u8; 16], &key(20), &iv).is_err());
    }

    #[test]
    fn test_wrong_iv_length_is_rejected() {
        assert!(encrypt(b"data", &key(24), &[0u8; 8]).is_err());
        assert!(decrypt(&[0u8; 16], &key(24), &[0u8; 8]).is_err());
    }

    #[test]
    fn test_partial_block_ciphertext_is_rejected() {
        let result = decrypt(&[0u8; 15], &key(24), &[0u8; IV_SIZE]);
        assert!(matches!(result, Err(TokenError::Cipher { .. })));
    }
}
