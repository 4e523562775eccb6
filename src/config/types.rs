use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

pub const DEFAULT_ENDPOINT: &str = "https://api.quotable.io/random";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Settings for the quotes endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the random-quote endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Sent as the `maxLength` query parameter when set.
    #[serde(default)]
    pub max_length: Option<u32>,
    /// Total request timeout. `None` keeps the HTTP client default.
    #[serde(default)]
    pub timeout_seconds: Option<u32>,
}

/// Settings for the screen itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub overlap: OverlapPolicy,
    /// Interval between animation frames in milliseconds (default: 16).
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    /// Capture the mouse so the button can be clicked.
    #[serde(default = "default_true")]
    pub mouse: bool,
}

/// File logging. Nothing is logged unless `path` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Default level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// What a new-quote request does while a transition is still running.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Start a new cycle; results of the superseded cycle are dropped.
    #[default]
    Restart,
    /// Drop the request until the running cycle is back to idle.
    Ignore,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_frame_ms() -> u64 {
    16
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_length: None,
            timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            overlap: OverlapPolicy::default(),
            frame_ms: default_frame_ms(),
            mouse: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            level: default_log_level(),
        }
    }
}
