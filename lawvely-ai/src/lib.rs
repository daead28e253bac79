//! lawvely-ai library interface
//!
//! Summarization pipeline for legislation texts: fetch raw text, generate
//! title and summaries via the OpenAI gateway, classify into the fixed
//! category taxonomy, extract the enactment date, and assemble a
//! `LegislationRecord` ready for storage.

pub mod classifier;
pub mod dates;
pub mod fetcher;
pub mod openai;
pub mod pipeline;
pub mod summarizer;

pub use classifier::CategoryClassifier;
pub use openai::{ChatMessage, OpenAiClient, OpenAiError};
pub use pipeline::SummarizePipeline;
