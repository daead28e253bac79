//! Database initialization
//!
//! Opens (creating if needed) the lawvely SQLite database and applies the
//! schema. Table creation is idempotent, so every service calls this on
//! startup regardless of which ran first.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL allows the API to keep serving reads while the seeder writes
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_legislation_summaries_table(&pool).await?;
    create_user_preferences_table(&pool).await?;

    Ok(pool)
}

async fn create_legislation_summaries_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS legislation_summaries (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            summary_of_legislation TEXT NOT NULL,
            summary_of_sub_sections TEXT NOT NULL,
            categories TEXT NOT NULL DEFAULT '[]',
            enactment_date TEXT,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_user_preferences_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS user_preferences (
            user_id TEXT NOT NULL,
            legislation_id TEXT NOT NULL
                REFERENCES legislation_summaries(id) ON DELETE CASCADE,
            saved_at TEXT NOT NULL,
            PRIMARY KEY (user_id, legislation_id)
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
