use serde::Deserialize;

use crate::infrastructure::token::{
    SigningMode, TokenCodecConfig, DEFAULT_EXPIRATION, DEFAULT_KEY_LENGTH,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub token: TokenSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Token codec settings.
///
/// The secret has no fallback value: it must arrive through a config
/// file or the `APP__TOKEN__SECRET` environment variable, and codec
/// construction rejects an absent secret.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenSettings {
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_expiration")]
    pub default_expiration: String,
    #[serde(default = "default_key_length")]
    pub key_length: usize,
    #[serde(default = "default_signed")]
    pub signed: bool,
}

fn default_expiration() -> String {
    DEFAULT_EXPIRATION.to_string()
}

fn default_key_length() -> usize {
    DEFAULT_KEY_LENGTH
}

fn default_signed() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            token: TokenSettings::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            secret: String::new(),
            default_expiration: default_expiration(),
            key_length: default_key_length(),
            signed: default_signed(),
        }
    }
}

impl From<&TokenSettings> for TokenCodecConfig {
    fn from(settings: &TokenSettings) -> Self {
        let mode = if settings.signed {
            SigningMode::Signed
        } else {
            SigningMode::Unsigned
        };

        TokenCodecConfig::new(settings.secret.clone())
            .with_expiration(settings.default_expiration.clone())
            .with_key_length(settings.key_length)
            .with_mode(mode)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.token.default_expiration, "10 days");
        assert_eq!(config.token.key_length, 24);
        assert!(config.token.signed);
        // No literal secret fallback anywhere.
        assert!(config.token.secret.is_empty());
    }

    #[test]
    fn test_settings_convert_to_codec_config() {
        let settings = TokenSettings {
            secret: "s3cr3t".to_string(),
            default_expiration: "1h".to_string(),
            key_length: 32,
            signed: false,
        };

        let codec_config = TokenCodecConfig::from(&settings);
        assert_eq!(codec_config.secret, "s3cr3t");
        assert_eq!(codec_config.default_expiration, "1h");
        assert_eq!(codec_config.key_length, 32);
        assert_eq!(codec_config.mode, SigningMode::Unsigned);
    }
}
