//! Application state for shared services

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::TokenError;
use crate::infrastructure::token::{TokenCodec, TokenCodecConfig};

/// Application state shared across handlers.
///
/// The codec is immutable once constructed; handlers only ever read it,
/// so a plain `Arc` with no locking is enough.
#[derive(Debug, Clone)]
pub struct AppState {
    pub codec: Arc<TokenCodec>,
}

impl AppState {
    pub fn new(codec: TokenCodec) -> Self {
        Self {
            codec: Arc::new(codec),
        }
    }

    /// Build the state from application configuration.
    ///
    /// Fails fast on an unusable token configuration (absent secret,
    /// bad key length, unparseable default expiration) so the process
    /// refuses to start rather than serving a broken codec.
    pub fn from_config(config: &AppConfig) -> Result<Self, TokenError> {
        let codec = TokenCodec::new(TokenCodecConfig::from(&config.token))?;
        Ok(Self::new(codec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_secret() {
        let config = AppConfig::default();
        assert!(AppState::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_with_secret() {
        let mut config = AppConfig::default();
        config.token.secret = "s3cr3t".to_string();
        assert!(AppState::from_config(&config).is_ok());
    }
}
