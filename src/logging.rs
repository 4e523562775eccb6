//! File logging. Anything written to stdout or stderr would land on top of
//! the TUI, so logs only ever go to a file.

use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

/// Names a log file; beats `[log] path` but not `--log-path`.
pub const LOG_ENV_VAR: &str = "QUOTECARD_LOG";

/// Applies the value of [`LOG_ENV_VAR`], if any, to `log`.
pub fn apply_env_override(log: &mut LogConfig, value: Option<OsString>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        log.path = Some(PathBuf::from(value));
    }
}

/// Starts the global subscriber when a log file is configured.
///
/// `RUST_LOG` wins over `log.level`. Returns whether logging is on.
pub fn init_tracing(config: &LogConfig) -> bool {
    let Some(path) = &config.path else {
        return false;
    };

    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: cannot create log file {}: {}",
                path.display(),
                err
            );
            return false;
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_directive(&config.level))
        .from_env_lossy();

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    true
}

fn default_directive(level: &str) -> Directive {
    level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO)
        .into()
}
