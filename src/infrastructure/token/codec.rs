//! Token codec: encode/decode between identities and sealed tokens
//!
//! Encode: identity -> payload (expiration attached) -> JSON -> AES-CBC
//! under a scrypt-derived key with a fresh random IV -> hex -> HMAC
//! signature. Decode runs the gates in reverse order; every failed gate
//! is a terminal typed rejection.
//!
//! Wire format, all segments hex:
//!
//! ```text
//! <iv>.<ciphertext>.<signature>    (signed)
//! <iv>.<ciphertext>                (unsigned)
//! ```
//!
//! The IV travels inside the token string so no out-of-band context has
//! to accompany it.

use crate::domain::{now_epoch_secs, parse_duration, Identity, Payload, TokenError};

use super::cipher::{self, IV_SIZE};
use super::kdf::derive_key;
use super::signer::TokenSigner;

/// Default expiration offset applied when an encode call passes none
pub const DEFAULT_EXPIRATION: &str = "10 days";

/// Default symmetric key length in bytes (AES-192)
pub const DEFAULT_KEY_LENGTH: usize = 24;

/// Whether tokens carry an HMAC signature.
///
/// `Signed` is the default and the right choice for tokens that cross a
/// trust boundary. `Unsigned` is a deliberate lighter-weight mode for
/// tokens transported over an already-authenticated channel; tampering
/// there surfaces as a cipher/parse failure instead of a typed
/// integrity rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningMode {
    #[default]
    Signed,
    Unsigned,
}

/// Configuration for the token codec.
///
/// Owned and supplied by the caller; the codec holds no process-global
/// state, so tests can construct codecs with distinct secrets freely.
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// Shared secret; trust anchor for both confidentiality and integrity
    pub secret: String,
    /// Expiration spec applied when an encode call passes none
    pub default_expiration: String,
    /// Symmetric key length in bytes (16, 24 or 32)
    pub key_length: usize,
    /// Signed or unsigned tokens
    pub mode: SigningMode,
}

impl TokenCodecConfig {
    /// Create a configuration with the given secret and the defaults
    /// for everything else
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Self::default()
        }
    }

    /// Override the default expiration spec
    pub fn with_expiration(mut self, spec: impl Into<String>) -> Self {
        self.default_expiration = spec.into();
        self
    }

    /// Override the key length
    pub fn with_key_length(mut self, key_length: usize) -> Self {
        self.key_length = key_length;
        self
    }

    /// Override the signing mode
    pub fn with_mode(mut self, mode: SigningMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for TokenCodecConfig {
    fn default() -> Self {
        // No secret fallback: an empty secret fails codec construction.
        Self {
            secret: String::new(),
            default_expiration: DEFAULT_EXPIRATION.to_string(),
            key_length: DEFAULT_KEY_LENGTH,
            mode: SigningMode::default(),
        }
    }
}

/// The token codec.
///
/// Construction validates the configuration and derives the symmetric
/// key once; `encode`/`decode` are pure computations over `&self`, so a
/// codec can be shared across threads without locking. Rotating the
/// secret means constructing a new codec.
#[derive(Clone)]
pub struct TokenCodec {
    key: Vec<u8>,
    signer: TokenSigner,
    default_expiration: chrono::Duration,
    mode: SigningMode,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("key", &"[hidden]")
            .field("signer", &self.signer)
            .field("default_expiration", &self.default_expiration)
            .field("mode", &self.mode)
            .finish()
    }
}

impl TokenCodec {
    /// Create a codec from the given configuration.
    ///
    /// Fails with a configuration error when the secret is absent, the
    /// key length is not an accepted AES key size, or the default
    /// expiration spec does not parse.
    pub fn new(config: TokenCodecConfig) -> Result<Self, TokenError> {
        if config.secret.is_empty() {
            return Err(TokenError::configuration(
                "signing secret must be provided",
            ));
        }

        let default_expiration = parse_duration(&config.default_expiration)?;
        let key = derive_key(&config.secret, config.key_length)?;
        let signer = TokenSigner::new(&config.secret);

        Ok(Self {
            key,
            signer,
            default_expiration,
            mode: config.mode,
        })
    }

    /// Encode an identity into a token.
    ///
    /// `expiration` is a duration spec such as "10 days"; when absent
    /// the configured default applies. The expiration becomes an
    /// absolute whole-second epoch timestamp inside the encrypted
    /// payload.
    pub fn encode(
        &self,
        identity: &Identity,
        expiration: Option<&str>,
    ) -> Result<String, TokenError> {
        let offset = match expiration {
            Some(spec) => parse_duration(spec)?,
            None => self.default_expiration,
        };
        let exp = now_epoch_secs() + offset.num_seconds();

        let payload = Payload::from_identity(identity, exp);
        let plaintext = serde_json::to_vec(&payload)
            .map_err(|e| TokenError::cipher(format!("failed to serialize payload: {}", e)))?;

        let iv = cipher::random_iv();
        let ciphertext = cipher::encrypt(&plaintext, &self.key, &iv)?;

        let iv_hex = hex::encode(iv);
        let ciphertext_hex = hex::encode(ciphertext);

        match self.mode {
            SigningMode::Signed => {
                let signature = self.signer.sign(&ciphertext_hex);
                Ok(format!("{}.{}.{}", iv_hex, ciphertext_hex, signature))
            }
            SigningMode::Unsigned => Ok(format!("{}.{}", iv_hex, ciphertext_hex)),
        }
    }

    /// Decode a token back into the identity it carries.
    ///
    /// Gate order: split, signature (signed mode), decrypt, parse,
    /// expiration present, not expired. Any failing gate is terminal.
    pub fn decode(&self, token: &str) -> Result<Identity, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::missing_input("no token provided"));
        }

        let segments: Vec<&str> = token.split('.').collect();
        let (iv_hex, ciphertext_hex) = match (self.mode, segments.as_slice()) {
            (SigningMode::Signed, [iv, ciphertext, signature]) => {
                self.signer.verify(ciphertext, signature)?;
                (*iv, *ciphertext)
            }
            (SigningMode::Unsigned, [iv, ciphertext]) => (*iv, *ciphertext),
            _ => {
                return Err(TokenError::cipher(
                    "malformed token: unexpected segment count",
                ))
            }
        };

        let iv = hex::decode(iv_hex)
            .map_err(|_| TokenError::cipher("initialization vector is not valid hex"))?;
        if iv.len() != IV_SIZE {
            return Err(TokenError::cipher(format!(
                "initialization vector must be {} bytes, got {}",
                IV_SIZE,
                iv.len()
            )));
        }

        let ciphertext = hex::decode(ciphertext_hex)
            .map_err(|_| TokenError::cipher("ciphertext is not valid hex"))?;

        let plaintext = cipher::decrypt(&ciphertext, &self.key, &iv)?;
        let payload: Payload = serde_json::from_slice(&plaintext)
            .map_err(|_| TokenError::cipher("decrypted payload is not a valid identity"))?;

        let exp = payload.exp.ok_or(TokenError::MissingExpiration)?;
        if now_epoch_secs() >= exp {
            return Err(TokenError::Expired);
        }

        Ok(payload.into_identity())
    }
}
