//! webtldr - Fetch a web page and produce a short markdown summary of it
//! with an LLM.
//!
//! The crate is a linear pipeline: fetch the page over HTTP, extract the
//! title and readable body text, build a fixed two-message prompt, and
//! request a summary from a chat completions endpoint. Each stage fails
//! fast; the first error propagates to the caller unchanged.
//!
//! # Architecture
//!
//! The system uses:
//! - reqwest for outbound HTTP (page fetch and LLM call)
//! - scraper for HTML parsing and text extraction
//! - Tokio for async runtime
//! - tracing for structured logging
//!
//! # Example
//!
//! ```no_run
//! use webtldr::core::config::AppConfig;
//! use webtldr::pipeline::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     webtldr::setup_logging();
//!
//!     // Credential and endpoint settings come from the environment
//!     let config = AppConfig::from_env()?;
//!
//!     let summarizer = Summarizer::from_config(&config)?;
//!     let summary = summarizer.summarize_url("https://example.com").await?;
//!     println!("{summary}");
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod views;
pub mod web;

/// Configure structured logging for the CLI.
///
/// This function sets up tracing-subscriber with a plain formatter and an
/// environment filter (`RUST_LOG`, defaulting to `info`). It should be
/// called once at process start; the library itself never installs a
/// subscriber.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your binary
/// webtldr::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
