//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One summarized piece of legislation, keyed by a slug of its title.
///
/// Serialized in camelCase to match the wire format the browser client
/// consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegislationRecord {
    /// Slug derived from the title (see `crate::slug::slugify`)
    pub id: String,
    /// Title extracted from the raw legislation text
    pub title: String,
    /// Source URL the raw text was fetched from
    pub url: String,
    /// Layman's-terms summary of the whole act
    pub summary_of_legislation: String,
    /// Step-by-step walkthrough of the act's sub-sections
    pub summary_of_sub_sections: String,
    /// One or more taxonomy labels, in classifier emission order
    pub categories: Vec<String>,
    /// Human-readable enactment date, if the text states one
    pub enactment_date: Option<String>,
    /// When the record was created by the seeder
    pub created_at: DateTime<Utc>,
}
