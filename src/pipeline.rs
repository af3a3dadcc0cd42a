//! The fetch → extract → summarize pipeline.

use tracing::{debug, info};

use crate::ai::client::{LlmClient, SummarizeMessages};
use crate::ai::prompt::build_messages;
use crate::core::config::AppConfig;
use crate::errors::SummarizeError;
use crate::views;
use crate::web::extractor::extract;
use crate::web::fetcher::{FetchPage, PageFetcher};

/// Pipeline orchestrator.
///
/// Holds a fetcher and a summarization client and runs the stages
/// strictly in sequence. Stateless between invocations; concurrent
/// calls for different URLs are independent.
pub struct Summarizer<F, S> {
    fetcher: F,
    client: S,
    max_content_chars: Option<usize>,
}

impl Summarizer<PageFetcher, LlmClient> {
    /// Wire up the production fetcher and client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when either HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizeError> {
        let fetcher = PageFetcher::new(config.timeout_secs)?;
        let client = LlmClient::new(
            config.credential.clone(),
            &config.api_base,
            &config.model,
            config.timeout_secs,
        )?;
        Ok(Self::new(fetcher, client, config.max_content_chars))
    }
}

impl<F: FetchPage, S: SummarizeMessages> Summarizer<F, S> {
    pub fn new(fetcher: F, client: S, max_content_chars: Option<usize>) -> Self {
        Self {
            fetcher,
            client,
            max_content_chars,
        }
    }

    /// Run the full pipeline for one URL and return the summary text.
    ///
    /// Stages run strictly in sequence: fetch, extract, prompt build,
    /// summarize. The first failure propagates unchanged and later
    /// stages are not invoked; there is no partial result.
    ///
    /// # Errors
    ///
    /// Propagates `FetchError`, `ParseError`, or `ApiError` from the
    /// failing stage.
    pub async fn summarize_url(&self, url: &str) -> Result<String, SummarizeError> {
        info!(%url, "summarizing page");

        let html = self.fetcher.fetch(url).await?;
        let mut page = extract(url, &html)?;
        debug!(
            title = %page.title,
            content_chars = page.content.chars().count(),
            "page extracted"
        );

        if let Some(limit) = self.max_content_chars {
            page.content = truncate_content(page.content, limit);
        }

        let messages = build_messages(&page);
        let summary = self.client.summarize(messages).await?;
        info!(summary_len = summary.len(), "summary generated");

        Ok(summary)
    }

    /// Run the pipeline and format the result for display: a markdown
    /// heading naming the source URL, then the summary.
    ///
    /// # Errors
    ///
    /// Propagates any pipeline failure unchanged.
    pub async fn display_summary(&self, url: &str) -> Result<String, SummarizeError> {
        let summary = self.summarize_url(url).await?;
        Ok(views::render_summary(url, &summary))
    }
}

/// Cut `content` to at most `limit` characters.
///
/// Counts characters rather than bytes so the cut never lands inside a
/// code point.
fn truncate_content(content: String, limit: usize) -> String {
    if content.chars().count() <= limit {
        return content;
    }
    content.chars().take(limit).collect()
}
