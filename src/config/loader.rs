use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::types::Config;

const MIN_FRAME_MS: u64 = 10;
const MAX_FRAME_MS: u64 = 1000;

/// Errors that can occur when loading configuration.
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
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/quotecard/config.toml` on Linux, the platform
    /// equivalent elsewhere, and the current directory as a last resort.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("quotecard").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. An existing file must parse
    /// and validate.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is an absolute http(s) URL
    /// - `max_length` and `timeout_seconds` are positive when set
    /// - `frame_ms` lies within 10..=1000
    /// - `log.level` names a tracing level
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.api.endpoint;
        match reqwest::Url::parse(endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Endpoint '{}' must use http or https, not '{}'",
                        endpoint,
                        url.scheme()
                    ),
                });
            }
            Err(e) => {
                return Err(ConfigError::ValidationError {
                    message: format!("Endpoint '{}' is not a valid URL: {}", endpoint, e),
                });
            }
        }

        if self.api.max_length == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "max_length must be greater than 0".to_string(),
            });
        }

        if self.api.timeout_seconds == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "timeout_seconds must be greater than 0".to_string(),
            });
        }

        let frame_ms = self.ui.frame_ms;
        if !(MIN_FRAME_MS..=MAX_FRAME_MS).contains(&frame_ms) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "frame_ms must be between {} and {}, got {}",
                    MIN_FRAME_MS, MAX_FRAME_MS, frame_ms
                ),
            });
        }

        if self.log.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "log level '{}' must be one of off, error, warn, info, debug, trace",
                    self.log.level
                ),
            });
        }

        Ok(())
    }

    /// Fills in settings the chosen locale implies and the user left unset.
    pub fn apply_locale_defaults(&mut self) {
        if self.api.max_length.is_none() {
            self.api.max_length = self.ui.locale.default_max_length();
        }
    }
}
