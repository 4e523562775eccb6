use std::time::Duration;

use reqwest::{Client, Url};

use crate::config::ApiConfig;
use crate::quote::error::FetchError;
use crate::quote::types::{Quote, QuoteResponse};

const USER_AGENT: &str = concat!("quotecard/", env!("CARGO_PKG_VERSION"));

/// Fetches random quotes from a single endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct QuoteClient {
    client: Client,
    url: Url,
}

impl QuoteClient {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let url = request_url(&api.endpoint, api.max_length)?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(seconds) = api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(u64::from(seconds)));
        }
        let client = builder.build().map_err(|e| FetchError::Network {
            endpoint: api.endpoint.clone(),
            source: e,
        })?;

        Ok(Self { client, url })
    }

    /// The exact URL requested, query included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issues one GET and parses the body. No retry.
    pub async fn fetch(&self) -> Result<Quote, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.network_error(e))?;
        let parsed: QuoteResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse { source: e })?;

        tracing::debug!(author = %parsed.author, "Fetched quote");
        Ok(Quote::from(parsed))
    }

    fn network_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Network {
            endpoint: self.url.to_string(),
            source,
        }
    }
}

fn request_url(endpoint: &str, max_length: Option<u32>) -> Result<Url, FetchError> {
    let mut url = Url::parse(endpoint).map_err(|e| FetchError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })?;
    if let Some(max_length) = max_length {
        url.query_pairs_mut()
            .append_pair("maxLength", &max_length.to_string());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_without_max_length_is_untouched() {
        let url = request_url("https://api.quotable.io/random", None).unwrap();
        assert_eq!(url.as_str(), "https://api.quotable.io/random");
    }

    #[test]
    fn url_appends_max_length() {
        let url = request_url("https://api.quotable.io/random", Some(100)).unwrap();
        assert_eq!(url.as_str(), "https://api.quotable.io/random?maxLength=100");
    }

    #[test]
    fn url_keeps_existing_query() {
        let url = request_url("http://localhost:1/random?tags=wisdom", Some(50)).unwrap();
        assert_eq!(url.query(), Some("tags=wisdom&maxLength=50"));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let err = request_url("not a url", None).unwrap_err();
        assert_eq!(err.kind(), "invalid_endpoint");
    }
}
