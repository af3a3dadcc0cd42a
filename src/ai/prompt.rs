//! Prompt construction for the summarization model.

use crate::core::models::{Message, Page, Role};

/// System instruction sent with every summarization request.
pub const SYSTEM_PROMPT: &str = "You are an assistant that analyzes the contents of a website \
    and provides a short summary, ignoring text that might be navigation related. \
    Respond in markdown.";

/// Build the instruction payload for one page.
///
/// Always returns exactly two messages: the fixed system instruction,
/// then a user message carrying a line naming the page title, a fixed
/// request for a short markdown summary, and the full extracted content
/// verbatim. No token budget is enforced here; an over-long prompt is a
/// summarization failure, not a prompt concern.
#[must_use]
pub fn build_messages(page: &Page) -> Vec<Message> {
    let user_prompt = format!(
        "You are looking at a website titled {}\n\
         The contents of this website is as follows; \
         please provide a short summary of this website in markdown. \
         If it includes news or announcements, then summarize these too.\n\n{}",
        page.title, page.content
    );

    vec![
        Message {
            role: Role::System,
            content: SYSTEM_PROMPT.to_string(),
        },
        Message {
            role: Role::User,
            content: user_prompt,
        },
    ]
}
