//! Legislation text acquisition
//!
//! Fetches raw legislation text from a source URL (legislation.gov.uk in
//! practice) and returns the response body as plain text.

use std::time::Duration;
use thiserror::Error;

const FETCH_TIMEOUT_SECS: u64 = 30;

/// Fetcher errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Source returned status {0} for {1}")]
    Status(u16, String),
}

impl From<FetchError> for lawvely_common::Error {
    fn from(e: FetchError) -> Self {
        lawvely_common::Error::Upstream(e.to_string())
    }
}

/// HTTP client for legislation sources
#[derive(Clone)]
pub struct LegislationFetcher {
    http_client: reqwest::Client,
}

impl LegislationFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// Fetch the raw text at `url`.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url = %url, "Fetching legislation text");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16(), url.to_string()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}
