//! Enactment date extraction
//!
//! One chat completion asking for the date the act came into force. The
//! model is instructed to answer with a fixed sentinel when the text does
//! not state a date; that sentinel maps to `None` (stored as SQL NULL).

use crate::openai::{ChatMessage, OpenAiClient, OpenAiError};

const DATE_MAX_TOKENS: u32 = 30;

/// Reply the model is told to give when no date is present
pub const NO_DATE_SENTINEL: &str = "No date found";

/// Extract the enactment date from a raw legislation text.
pub async fn extract_enactment_date(
    client: &OpenAiClient,
    legislation_text: &str,
) -> Result<Option<String>, OpenAiError> {
    let messages = [
        ChatMessage::system(format!(
            "Extract the date the following legislation was enacted or came into force. \
             Reply with only the date in a human-readable format, or \"{}\" if the text \
             does not state one.",
            NO_DATE_SENTINEL
        )),
        ChatMessage::user(legislation_text),
    ];

    let reply = client.complete(&messages, DATE_MAX_TOKENS, None).await?;
    Ok(parse_date_reply(&reply))
}

/// Map the model's reply to an optional date string. The sentinel is
/// matched case-insensitively, tolerating surrounding whitespace and a
/// trailing period.
pub fn parse_date_reply(reply: &str) -> Option<String> {
    let trimmed = reply.trim().trim_end_matches('.').trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_DATE_SENTINEL) {
        return None;
    }

    Some(trimmed.to_string())
}
