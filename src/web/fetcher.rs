//! Page fetching over HTTP
//!
//! Retrieves the raw bytes of the target page with a single GET request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::errors::SummarizeError;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; webtldr/0.1)";

/// Boundary trait for the fetch stage, kept narrow so the pipeline can
/// be exercised without network access.
#[async_trait]
pub trait FetchPage: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, SummarizeError>;
}

/// HTTP fetcher for target pages.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a fetcher with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the HTTP client cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| SummarizeError::FetchError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FetchPage for PageFetcher {
    /// Fetch the raw bytes of `url`.
    ///
    /// Only http and https URLs are accepted. Any non-2xx response
    /// status is a `FetchError` carrying the status code; the body of an
    /// error response is never parsed. No retries are attempted.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, SummarizeError> {
        let parsed = Url::parse(url)
            .map_err(|e| SummarizeError::FetchError(format!("invalid URL {url}: {e}")))?;

        if !["http", "https"].contains(&parsed.scheme()) {
            return Err(SummarizeError::FetchError(format!(
                "unsupported URL scheme: {}",
                parsed.scheme()
            )));
        }

        debug!(%url, "fetching page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SummarizeError::FetchError(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummarizeError::FetchError(format!(
                "{url} returned status {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SummarizeError::FetchError(format!("failed to read body of {url}: {e}")))?;

        debug!(%url, bytes = body.len(), "page fetched");

        Ok(body.to_vec())
    }
}
