//! Failure taxonomy for quote fetching.
//!
//! Every variant is handled the same way by the screen (sentinel quote plus a
//! log entry); the variants only exist to make the log useful.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body-read failure.
    #[error("Request to '{endpoint}' failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("Quotes endpoint returned {status}")]
    Status { status: u16 },

    /// Body is not JSON or lacks `content`/`author`.
    #[error("Malformed quote response: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid quotes endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },
}

impl FetchError {
    /// Short machine-friendly tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::Status { .. } => "status",
            FetchError::Parse { .. } => "parse",
            FetchError::InvalidEndpoint { .. } => "invalid_endpoint",
        }
    }
}
