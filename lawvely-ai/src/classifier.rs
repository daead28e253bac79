//! Category classification with a three-stage fallback cascade
//!
//! Stage 1 asks the model for one-or-more comma-separated taxonomy labels
//! and keeps only exact (case-sensitive) taxonomy members. When that
//! yields nothing, stage 2 scores each label by the frequency of its
//! tokens in the combined text. When the best score is zero, stage 3
//! picks the label with the highest character-bigram Dice similarity to
//! the combined text. Stages 2 and 3 are pure and cannot fail, so the
//! only failure mode of a classification is the stage-1 network call.
//!
//! Guarantees: a successful classification is never empty, every element
//! is a taxonomy member, and identical inputs with identical model
//! replies produce identical output.

use crate::openai::{ChatMessage, OpenAiClient, OpenAiError};
use lawvely_common::TAXONOMY;
use std::collections::HashMap;
use tracing::{debug, warn};

const CLASSIFY_MAX_TOKENS: u32 = 100;
const CLASSIFY_TEMPERATURE: f32 = 0.7;

/// Category classifier over the fixed taxonomy
#[derive(Clone)]
pub struct CategoryClassifier {
    openai: OpenAiClient,
}

impl CategoryClassifier {
    pub fn new(openai: OpenAiClient) -> Self {
        Self { openai }
    }

    /// Classify a legislation record by its title and sub-section summary.
    ///
    /// Fails only if the stage-1 model call fails; the local fallback
    /// stages always produce at least one label.
    pub async fn classify(
        &self,
        title: &str,
        summary_of_sub_sections: &str,
    ) -> Result<Vec<String>, OpenAiError> {
        let combined = combined_text(title, summary_of_sub_sections);

        let messages = [
            ChatMessage::system(format!(
                "You are a helpful assistant that classifies texts into specific categories. \
                 The available categories are: {}. Assign one or more of these categories to \
                 the text. Ensure that at least one category is always assigned.",
                TAXONOMY.join(", ")
            )),
            ChatMessage::user(format!(
                "Based on the following text, assign the most relevant categories:\n\n{}",
                combined
            )),
        ];

        let reply = self
            .openai
            .complete(&messages, CLASSIFY_MAX_TOKENS, Some(CLASSIFY_TEMPERATURE))
            .await?;

        Ok(resolve_categories(&reply, &combined))
    }
}

/// The unit of classification: title and sub-section summary joined into
/// one text blob.
pub fn combined_text(title: &str, summary_of_sub_sections: &str) -> String {
    format!(
        "Title: {}\nSummaryOfSubsections: {}",
        title, summary_of_sub_sections
    )
}

/// Apply the cascade to a stage-1 model reply. Pure; exposed for tests.
pub fn resolve_categories(model_reply: &str, combined: &str) -> Vec<String> {
    let valid = parse_model_reply(model_reply);
    if !valid.is_empty() {
        debug!(categories = ?valid, "Model assigned valid categories");
        return valid;
    }

    warn!("No valid categories assigned by the model; falling back to token-frequency matching");

    if let Some(label) = token_frequency_category(combined) {
        debug!(category = %label, "Selected category by token frequency");
        return vec![label.to_string()];
    }

    warn!("No token overlap with any category; falling back to fuzzy similarity");

    let label = fuzzy_category(combined);
    debug!(category = %label, "Selected category by fuzzy similarity");
    vec![label.to_string()]
}

/// Stage 1 parsing: split the reply on commas, trim each token, keep only
/// exact taxonomy members. Order is the model's emission order and
/// duplicates are preserved; both are observable behavior.
pub fn parse_model_reply(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|token| TAXONOMY.contains(token))
        .map(str::to_string)
        .collect()
}

/// Lowercase word tokens: maximal runs of alphanumeric characters.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stage 2: score each taxonomy label by summing, over the label's own
/// tokens, the frequency of that token in the combined text. Highest
/// score wins; ties break to the earlier label in taxonomy order. Returns
/// `None` when the best score is zero.
pub fn token_frequency_category(combined: &str) -> Option<&'static str> {
    let mut token_freq: HashMap<String, u32> = HashMap::new();
    for token in tokenize(combined) {
        *token_freq.entry(token).or_insert(0) += 1;
    }

    let mut best: Option<(&'static str, u32)> = None;
    for label in TAXONOMY {
        let score: u32 = tokenize(label)
            .iter()
            .map(|token| token_freq.get(token).copied().unwrap_or(0))
            .sum();

        // Strict > keeps the first of equal scores, preserving taxonomy order
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((label, score));
        }
    }

    match best {
        Some((label, score)) if score > 0 => Some(label),
        _ => None,
    }
}

/// Stage 3: character-bigram Dice similarity between the combined text
/// and each label. Always produces a label; ties (including all-zero
/// similarity) break to the earlier label in taxonomy order.
pub fn fuzzy_category(combined: &str) -> &'static str {
    let mut best_label = TAXONOMY[0];
    let mut best_score = f64::MIN;

    for label in TAXONOMY {
        let score = strsim::sorensen_dice(combined, label);
        if score > best_score {
            best_label = label;
            best_score = score;
        }
    }

    best_label
}
