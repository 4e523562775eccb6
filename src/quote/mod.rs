//! Random quote retrieval.

mod client;
mod error;
mod types;

pub use client::QuoteClient;
pub use error::FetchError;
pub use types::{Quote, QuoteResponse};
