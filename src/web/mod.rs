//! Fetching and text extraction for target pages

pub mod extractor;
pub mod fetcher;

// Re-export the main types for convenience
pub use extractor::extract;
pub use fetcher::{FetchPage, PageFetcher};
