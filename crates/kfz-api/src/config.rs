//! Configuration file parsing for the API server.
//!
//! Loads bind address, log level and extractor tuning from TOML.

use kfz_extractor::ExtractorConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// API configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Semantically invalid value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// API configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 3001)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Extractor tuning
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    3001
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ApiConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = toml::from_str(contents)?;
        config.extractor.validate().map_err(ConfigError::Invalid)?;
        if config.bind_address.is_empty() {
            return Err(ConfigError::Invalid("bind_address must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Configuration used when no file is given
    pub fn default_config() -> Self {
        ApiConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            log_level: default_log_level(),
            extractor: ExtractorConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:3001");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            log_level = "debug"

            [extractor]
            base_confidence = 0.4
            max_text_length = 2000
        "#;

        let config = ApiConfig::from_toml(toml).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.extractor.base_confidence, 0.4);
        assert_eq!(config.extractor.max_text_length, 2000);
        assert_eq!(config.extractor.brand_weight, 0.2);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ApiConfig::from_toml("").unwrap();
        assert_eq!(config.bind_port, 3001);
    }

    #[test]
    fn test_invalid_extractor_section() {
        let toml = r#"
            [extractor]
            mileage_weight = 2.0
        "#;
        assert!(matches!(
            ApiConfig::from_toml(toml),
            Err(ConfigError::Invalid(_))
        ));
    }
}
