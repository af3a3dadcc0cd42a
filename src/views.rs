//! Presentation formatting for generated summaries.

/// Format a summary as markdown with a heading naming the source URL.
#[must_use]
pub fn render_summary(url: &str, summary: &str) -> String {
    format!("# Summary of {url}\n\n{summary}")
}
