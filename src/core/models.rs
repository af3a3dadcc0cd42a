//! Data model for the summarization pipeline.

use serde::{Deserialize, Serialize};

/// The structured result of extracting one fetched HTML document.
///
/// `title` is never empty: extraction substitutes a sentinel when the
/// document carries no usable `<title>`. `content` holds the cleaned
/// body text with no markup, script, or style fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub title: String,
    pub content: String,
}

/// Role of one turn in the instruction payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One turn of the instruction payload sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Request body for the chat completions endpoint.
///
/// No temperature or output cap is set; the provider's defaults apply.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

/// Response body from the chat completions endpoint.
///
/// Only the fields the pipeline consumes are modeled; unknown fields are
/// ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: String,
}
