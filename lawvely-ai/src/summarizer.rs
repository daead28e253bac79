//! Title extraction and summary generation
//!
//! Three chat completions per legislation text: one for the title, then
//! two issued concurrently for the overall summary and the per-sub-section
//! walkthrough.

use crate::openai::{ChatMessage, OpenAiClient, OpenAiError};
use futures::try_join;

const TITLE_MAX_TOKENS: u32 = 50;
const SUMMARY_MAX_TOKENS: u32 = 400;
const SUMMARY_TEMPERATURE: f32 = 0.7;

/// Generated title and summaries for one legislation text
#[derive(Debug, Clone)]
pub struct Summaries {
    pub title: String,
    pub summary_of_legislation: String,
    pub summary_of_sub_sections: String,
}

/// Extract the title of a raw legislation text.
pub async fn extract_title(
    client: &OpenAiClient,
    legislation_text: &str,
) -> Result<String, OpenAiError> {
    let messages = [
        ChatMessage::system("Extract the title of the following text."),
        ChatMessage::user(legislation_text),
    ];

    let reply = client.complete(&messages, TITLE_MAX_TOKENS, None).await?;
    Ok(reply.trim().to_string())
}

/// Generate the title plus both summaries for a raw legislation text.
///
/// The title is extracted first (the summary prompts embed it), then the
/// two summary completions run concurrently.
pub async fn generate_summaries(
    client: &OpenAiClient,
    legislation_text: &str,
) -> Result<Summaries, OpenAiError> {
    let title = extract_title(client, legislation_text).await?;

    let legislation_messages = [
        ChatMessage::system(format!(
            "Begin the summary with \"The {} relates to...\" You are an assistant that \
             explains the legal texts concisely in a summary, and in layman's terms. \
             Ensure the text is shorter than the original text from the url.",
            title
        )),
        ChatMessage::user(format!(
            "Summarize and explain the following legal text concisely, and in laymans terms:\n\n{}",
            legislation_text
        )),
    ];

    let sub_section_messages = [
        ChatMessage::system(format!(
            "Explain each sub-section of the act in a step-by-step manner, starting with \
             \"The subsections of {} cover...\". Make it simple and easy to understand.",
            title
        )),
        ChatMessage::user(format!(
            "Summarize and explain the following legal text concisely and in laymans terms:\n\n{}",
            legislation_text
        )),
    ];

    let (summary_of_legislation, summary_of_sub_sections) = try_join!(
        client.complete(
            &legislation_messages,
            SUMMARY_MAX_TOKENS,
            Some(SUMMARY_TEMPERATURE)
        ),
        client.complete(
            &sub_section_messages,
            SUMMARY_MAX_TOKENS,
            Some(SUMMARY_TEMPERATURE)
        ),
    )?;

    Ok(Summaries {
        title,
        summary_of_legislation: summary_of_legislation.trim().to_string(),
        summary_of_sub_sections: summary_of_sub_sections.trim().to_string(),
    })
}
