//! LLM API client
//!
//! Sends the instruction payload to the chat completions endpoint and
//! returns the first completion's text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::core::config::ApiCredential;
use crate::core::models::{ChatRequest, ChatResponse, Message};
use crate::errors::SummarizeError;

/// Boundary trait for the summarization call, kept narrow so the
/// pipeline can be exercised without network access.
#[async_trait]
pub trait SummarizeMessages: Send + Sync {
    async fn summarize(&self, messages: Vec<Message>) -> Result<String, SummarizeError>;
}

/// Chat completions client holding the injected, pre-validated
/// credential.
pub struct LlmClient {
    client: Client,
    credential: ApiCredential,
    api_base: String,
    model: String,
}

impl LlmClient {
    /// Create a client for `api_base` with the given model and timeout.
    ///
    /// The credential must already be validated; this constructor
    /// performs no validation and no I/O.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the HTTP client cannot be constructed.
    pub fn new(
        credential: ApiCredential,
        api_base: &str,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SummarizeError::ApiError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            credential,
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl SummarizeMessages for LlmClient {
    /// Send `messages` as the full conversation and return the first
    /// completion's text, trimmed.
    ///
    /// Decoding parameters are left to the provider's defaults. Any
    /// non-success status, schema mismatch, empty choices array, or
    /// whitespace-only completion is an `ApiError`; no retry is
    /// attempted.
    async fn summarize(&self, messages: Vec<Message>) -> Result<String, SummarizeError> {
        #[cfg(feature = "debug-logs")]
        info!("Sending prompt:\n{:?}", messages);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            message_count = messages.len(),
            model = %self.model,
            "requesting summary"
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(self.credential.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizeError::ApiError(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("failed to read error response body: {e}"));
            return Err(SummarizeError::ApiError(format!(
                "status {status}: {error_text}"
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummarizeError::ApiError(format!("unexpected response shape: {e}")))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SummarizeError::ApiError("no completion choices".to_string()))?;

        let summary = choice.message.content.trim().to_string();
        if summary.is_empty() {
            return Err(SummarizeError::ApiError(
                "empty completion text".to_string(),
            ));
        }

        debug!(summary_len = summary.len(), "summary received");

        Ok(summary)
    }
}
