mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LogConfig, OverlapPolicy, UiConfig, DEFAULT_ENDPOINT};
