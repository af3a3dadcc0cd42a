use std::env;

use crate::errors::SummarizeError;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Endpoint base used when `OPENAI_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A validated OpenAI API credential.
///
/// Construction is the single validation point: the raw value must be
/// non-empty, carry no leading or trailing whitespace, and start with
/// `sk-`. Everything downstream receives the credential by injection and
/// never re-validates it.
#[derive(Debug, Clone)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Validate `raw` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the value is empty, padded with
    /// whitespace, or missing the `sk-` prefix. No I/O happens before or
    /// during validation.
    pub fn new(raw: &str) -> Result<Self, SummarizeError> {
        if raw.is_empty() {
            return Err(SummarizeError::ConfigError(
                "OPENAI_API_KEY is empty".to_string(),
            ));
        }
        if raw.trim() != raw {
            return Err(SummarizeError::ConfigError(
                "OPENAI_API_KEY has leading or trailing whitespace".to_string(),
            ));
        }
        if !raw.starts_with("sk-") {
            return Err(SummarizeError::ConfigError(
                "OPENAI_API_KEY does not start with sk-".to_string(),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credential: ApiCredential,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
    /// When set, extracted content is cut to this many characters before
    /// prompt building. Off by default; the full text passes through.
    pub max_content_chars: Option<usize>,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `OPENAI_API_KEY` is missing or fails
    /// credential validation, or when a numeric override does not parse.
    pub fn from_env() -> Result<Self, SummarizeError> {
        let raw_key = env::var("OPENAI_API_KEY")
            .map_err(|e| SummarizeError::ConfigError(format!("OPENAI_API_KEY: {e}")))?;
        let credential = ApiCredential::new(&raw_key)?;

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_base = env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let timeout_secs = match env::var("WEBTLDR_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| SummarizeError::ConfigError(format!("WEBTLDR_TIMEOUT_SECS: {e}")))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let max_content_chars = match env::var("WEBTLDR_MAX_CONTENT_CHARS") {
            Ok(raw) => Some(raw.parse().map_err(|e| {
                SummarizeError::ConfigError(format!("WEBTLDR_MAX_CONTENT_CHARS: {e}"))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            credential,
            model,
            api_base,
            timeout_secs,
            max_content_chars,
        })
    }
}
