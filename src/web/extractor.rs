//! HTML text extraction
//!
//! Turns a fetched HTML document into a [`Page`]: the trimmed `<title>`
//! text plus the readable body text, with noise elements dropped.

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::core::models::Page;
use crate::errors::SummarizeError;

/// Substituted when the document has no usable `<title>` element.
pub const NO_TITLE: &str = "No title found";

/// Element kinds whose subtrees never contribute text.
const SKIPPED_TAGS: &[&str] = &["script", "style", "img", "input"];

/// Separator inserted between consecutive text fragments.
const FRAGMENT_SEPARATOR: &str = " \n";

/// Extract a [`Page`] from raw HTML bytes.
///
/// The body text is produced by walking `<body>` in document order,
/// skipping the subtrees of {script, style, img, input}, trimming each
/// text node, dropping fragments that are empty after trimming, and
/// joining the survivors with a space followed by a newline. No
/// deduplication or truncation happens here.
///
/// Extraction is deterministic: identical input yields identical output.
///
/// # Errors
///
/// Returns `ParseError` when the bytes cannot be interpreted as an HTML
/// document. The HTML5 algorithm recovers from malformed markup, so in
/// practice this means input that does not decode as UTF-8 text.
pub fn extract(url: &str, html: &[u8]) -> Result<Page, SummarizeError> {
    let text = std::str::from_utf8(html)
        .map_err(|e| SummarizeError::ParseError(format!("document is not valid UTF-8: {e}")))?;

    let document = Html::parse_document(text);

    Ok(Page {
        url: url.to_string(),
        title: extract_title(&document),
        content: extract_content(&document),
    })
}

/// Trimmed text of the first `<title>` element, or the sentinel.
fn extract_title(document: &Html) -> String {
    if let Ok(selector) = Selector::parse("title") {
        if let Some(element) = document.select(&selector).next() {
            let title = element.text().collect::<String>().trim().to_string();
            if !title.is_empty() {
                return title;
            }
        }
    }
    NO_TITLE.to_string()
}

/// Readable text of `<body>`, fragments joined with the separator.
///
/// The walk starts at `<body>` so head content, the title included,
/// never reaches the summary prompt.
fn extract_content(document: &Html) -> String {
    let mut fragments: Vec<String> = Vec::new();

    if let Ok(selector) = Selector::parse("body") {
        if let Some(body) = document.select(&selector).next() {
            collect_fragments(body, &mut fragments);
        }
    }

    fragments.join(FRAGMENT_SEPARATOR)
}

fn collect_fragments(element: ElementRef<'_>, fragments: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    fragments.push(trimmed.to_string());
                }
            }
            Node::Element(el) => {
                if SKIPPED_TAGS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_fragments(child_element, fragments);
                }
            }
            _ => {}
        }
    }
}
