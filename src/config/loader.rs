use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Why a config file could not be turned into a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Default config location: `mvi-trade/config.toml` under the
    /// platform config directory (`~/.config` on Linux), or under the
    /// working directory when the platform has none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("mvi-trade").join("config.toml")
    }

    /// Load from [`Config::config_path`]. No file there means the
    /// built-in demo values.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the repositories and formatter cannot work with:
    /// a price that is zero or negative, negative seed balances and
    /// blank currency codes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let market = &self.market;

        if market.crypto_price <= rust_decimal::Decimal::ZERO {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "crypto_price must be positive, got {}",
                    market.crypto_price
                ),
            });
        }

        if market.crypto_balance.is_sign_negative() || market.fiat_balance.is_sign_negative() {
            return Err(ConfigError::ValidationError {
                message: "Seed balances must not be negative".to_string(),
            });
        }

        if self.format.crypto_symbol.trim().is_empty() || self.format.fiat_symbol.trim().is_empty()
        {
            return Err(ConfigError::ValidationError {
                message: "Currency symbols must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
