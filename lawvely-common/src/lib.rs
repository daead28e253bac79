//! Shared types and utilities for the lawvely services
//!
//! Used by lawvely-seed (summarization pipeline) and lawvely-api (HTTP
//! read API): error type, configuration resolution, database schema and
//! queries, slug derivation, and the fixed category taxonomy.

pub mod config;
pub mod db;
pub mod error;
pub mod slug;
pub mod taxonomy;

pub use error::{Error, Result};
pub use taxonomy::TAXONOMY;
