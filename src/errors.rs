use thiserror::Error;

/// Error taxonomy for the summarization pipeline.
///
/// Every stage fails fast and propagates its error unchanged; the
/// orchestrator performs no recovery, retry, or fallback.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Failed to load configuration: {0}")]
    ConfigError(String),

    #[error("Failed to fetch page: {0}")]
    FetchError(String),

    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    #[error("Failed to access OpenAI API: {0}")]
    ApiError(String),
}
