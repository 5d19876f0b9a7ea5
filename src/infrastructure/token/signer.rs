//! Ciphertext integrity: HMAC-SHA256 signing and verification

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// Keyed signer over the hex-encoded ciphertext portion of a token.
#[derive(Clone)]
pub struct TokenSigner {
    secret: Vec<u8>,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl TokenSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Compute the hex signature over `data`.
    pub fn sign(&self, data: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(data.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verify a received hex signature over `data`.
    ///
    /// Uses the MAC's fixed-time comparison; a short-circuiting string
    /// equality would leak how much of the signature prefix matched.
    pub fn verify(&self, data: &str, signature_hex: &str) -> Result<(), TokenError> {
        let received = hex::decode(signature_hex).map_err(|_| TokenError::Integrity)?;

        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(data.as_bytes());
        mac.verify_slice(&received).map_err(|_| TokenError::Integrity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_is_deterministic() {
        let signer = TokenSigner::new("s3cr3t");
        assert_eq!(signer.sign("abcdef"), signer.sign("abcdef"));
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = TokenSigner::new("s3cr3t");
        let signature = signer.sign("deadbeef");

        assert_eq!(signature.len(), 64); // SHA-256 digest as hex
        assert!(signer.verify("deadbeef", &signature).is_ok());
    }

    #[test]
    fn test_verify_rejects_tampered_data() {
        let signer = TokenSigner::new("s3cr3t");
        let signature = signer.sign("deadbeef");

        let result = signer.verify("deadbeee", &signature);
        assert!(matches!(result, Err(TokenError::Integrity)));
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let signature = TokenSigner::new("secret-a").sign("deadbeef");

        let result = TokenSigner::new("secret-b").verify("deadbeef", &signature);
        assert!(matches!(result, Err(TokenError::Integrity)));
    }

    #[test]
    fn test_verify_rejects_non_hex_signature() {
        let signer = TokenSigner::new("s3cr3t");
        let result = signer.verify("deadbeef", "not-hex!");
        assert!(matches!(result, Err(TokenError::Integrity)));
    }

    #[test]
    fn test_debug_hides_secret() {
        let signer = TokenSigner::new("s3cr3t");
        let rendered = format!("{:?}", signer);
        assert!(!rendered.contains("s3cr3t"));
    }
}
