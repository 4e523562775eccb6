//! Command line flags. Every flag overrides the matching config file value.

use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError, OverlapPolicy};
use crate::locale::Locale;
use crate::logging::{apply_env_override, LOG_ENV_VAR};

#[derive(Debug, Parser)]
#[command(
    name = "quotecard",
    version,
    about = "Shows a random quote on an animated card in the terminal"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quotes endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Ask the API for quotes of at most N characters
    #[arg(long, value_name = "N")]
    pub max_length: Option<u32>,

    /// Language of the screen texts
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// What a new request does while a transition is running
    #[arg(long, value_enum)]
    pub overlap: Option<OverlapPolicy>,

    /// Milliseconds between animation frames
    #[arg(long, value_name = "MS")]
    pub frame_ms: Option<u64>,

    /// Request timeout in seconds (default: none)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u32>,

    /// Leave the mouse alone; the button then only reacts to keys
    #[arg(long)]
    pub no_mouse: bool,

    /// Write logs to this file
    #[arg(short, long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log more: -v for debug, -vv for trace. Has no effect if RUST_LOG is set
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Loads the config file, applies `QUOTECARD_LOG`, flag overrides and
    /// locale defaults, then validates the result.
    ///
    /// A missing default config file means defaults; a missing file passed
    /// with `--config` is an error.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::ReadError {
                    path: path.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
                });
            }
            Some(path) => path.clone(),
            None => Config::config_path(),
        };

        let mut config = Config::load_from(&path)?;
        apply_env_override(&mut config.log, std::env::var_os(LOG_ENV_VAR));
        self.apply(&mut config);
        config.apply_locale_defaults();
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }
        if let Some(max_length) = self.max_length {
            config.api.max_length = Some(max_length);
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = Some(timeout);
        }
        if let Some(locale) = self.locale {
            config.ui.locale = locale;
        }
        if let Some(overlap) = self.overlap {
            config.ui.overlap = overlap;
        }
        if let Some(frame_ms) = self.frame_ms {
            config.ui.frame_ms = frame_ms;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
        if let Some(log_path) = &self.log_path {
            config.log.path = Some(log_path.clone());
        }
        match self.verbose {
            0 => {}
            1 => config.log.level = "debug".to_string(),
            _ => config.log.level = "trace".to_string(),
        }
    }
}
