//! Database access for lawvely
//!
//! SQLite via sqlx. The schema is created idempotently on startup by both
//! the seeder and the API service, so either can run first.

mod init;
mod models;
mod queries;

pub use init::init_database;
pub use models::LegislationRecord;
pub use queries::*;
