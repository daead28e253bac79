//! Per-URL summarization pipeline
//!
//! Orchestrates one legislation URL end to end: fetch raw text, generate
//! title and summaries, classify, extract the enactment date, and
//! assemble the record. No retries; any phase failure propagates and the
//! caller decides what to do with the URL.

use crate::classifier::CategoryClassifier;
use crate::fetcher::LegislationFetcher;
use crate::openai::OpenAiClient;
use crate::{dates, summarizer};
use chrono::Utc;
use lawvely_common::config::OpenAiConfig;
use lawvely_common::db::LegislationRecord;
use lawvely_common::{slug, Error, Result};
use tracing::info;

/// Summarization pipeline for legislation URLs
#[derive(Clone)]
pub struct SummarizePipeline {
    fetcher: LegislationFetcher,
    openai: OpenAiClient,
    classifier: CategoryClassifier,
}

impl SummarizePipeline {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let fetcher = LegislationFetcher::new()?;
        let openai = OpenAiClient::new(config)?;
        let classifier = CategoryClassifier::new(openai.clone());

        Ok(Self {
            fetcher,
            openai,
            classifier,
        })
    }

    /// Run the full pipeline for one URL and return the assembled record.
    pub async fn summarize_url(&self, url: &str) -> Result<LegislationRecord> {
        info!(url = %url, "Fetching legislation text");
        let legislation_text = self.fetcher.fetch(url).await?;

        info!(url = %url, "Generating title and summaries");
        let summaries = summarizer::generate_summaries(&self.openai, &legislation_text).await?;

        info!(title = %summaries.title, "Classifying into categories");
        let categories = self
            .classifier
            .classify(&summaries.title, &summaries.summary_of_sub_sections)
            .await?;

        info!(title = %summaries.title, "Extracting enactment date");
        let enactment_date = dates::extract_enactment_date(&self.openai, &legislation_text).await?;

        let id = slug::slugify(&summaries.title);
        if id.is_empty() {
            return Err(Error::Internal(format!(
                "Derived an empty slug from title {:?}",
                summaries.title
            )));
        }

        Ok(LegislationRecord {
            id,
            title: summaries.title,
            url: url.to_string(),
            summary_of_legislation: summaries.summary_of_legislation,
            summary_of_sub_sections: summaries.summary_of_sub_sections,
            categories,
            enactment_date,
            created_at: Utc::now(),
        })
    }
}
