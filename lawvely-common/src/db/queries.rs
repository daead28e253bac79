//! Query helpers shared by the seeder and the API service

use crate::db::LegislationRecord;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const RECORD_COLUMNS: &str = "id, title, url, summary_of_legislation, \
     summary_of_sub_sections, categories, enactment_date, created_at";

fn record_from_row(row: &SqliteRow) -> Result<LegislationRecord> {
    let categories_json: String = row.try_get("categories")?;
    let categories: Vec<String> = serde_json::from_str(&categories_json)
        .map_err(|e| Error::Internal(format!("Corrupt categories column: {}", e)))?;

    Ok(LegislationRecord {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        url: row.try_get("url")?,
        summary_of_legislation: row.try_get("summary_of_legislation")?,
        summary_of_sub_sections: row.try_get("summary_of_sub_sections")?,
        categories,
        enactment_date: row.try_get("enactment_date")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

/// Insert or replace a legislation record (records are keyed by slug, so
/// re-seeding the same act updates it in place).
pub async fn upsert_legislation(pool: &SqlitePool, record: &LegislationRecord) -> Result<()> {
    let categories_json = serde_json::to_string(&record.categories)
        .map_err(|e| Error::Internal(format!("Failed to encode categories: {}", e)))?;

    sqlx::query(
        "INSERT INTO legislation_summaries
             (id, title, url, summary_of_legislation, summary_of_sub_sections,
              categories, enactment_date, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
             title = excluded.title,
             url = excluded.url,
             summary_of_legislation = excluded.summary_of_legislation,
             summary_of_sub_sections = excluded.summary_of_sub_sections,
             categories = excluded.categories,
             enactment_date = excluded.enactment_date,
             created_at = excluded.created_at",
    )
    .bind(&record.id)
    .bind(&record.title)
    .bind(&record.url)
    .bind(&record.summary_of_legislation)
    .bind(&record.summary_of_sub_sections)
    .bind(&categories_json)
    .bind(&record.enactment_date)
    .bind(record.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Total record count
pub async fn count_legislation(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM legislation_summaries")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// One page of records, newest first
pub async fn list_legislation(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<Vec<LegislationRecord>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM legislation_summaries
         ORDER BY created_at DESC, id ASC
         LIMIT ? OFFSET ?",
        RECORD_COLUMNS
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    rows.iter().map(record_from_row).collect()
}

/// Single record by slug id
pub async fn get_legislation(pool: &SqlitePool, id: &str) -> Result<Option<LegislationRecord>> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM legislation_summaries WHERE id = ?",
        RECORD_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(record_from_row).transpose()
}

// Case-insensitive substring match over title and both summaries,
// mirroring the browser client's search behavior.
fn search_predicate() -> &'static str {
    "lower(title || ' ' || summary_of_legislation || ' ' || summary_of_sub_sections) \
     LIKE '%' || lower(?) || '%' ESCAPE '\\'"
}

// The query is a literal substring, not a pattern: LIKE metacharacters
// in user input must not act as wildcards.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub async fn count_search(pool: &SqlitePool, query: &str) -> Result<i64> {
    let count = sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM legislation_summaries WHERE {}",
        search_predicate()
    ))
    .bind(escape_like(query))
    .fetch_one(pool)
    .await?;
    Ok(count)
}

pub async fn search_legislation(
    pool: &SqlitePool,
    query: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<LegislationRecord>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM legislation_summaries WHERE {}
         ORDER BY created_at DESC, id ASC
         LIMIT ? OFFSET ?",
        RECORD_COLUMNS,
        search_predicate()
    ))
    .bind(escape_like(query))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    rows.iter().map(record_from_row).collect()
}

// The categories column holds a JSON array of taxonomy labels; labels
// contain no quote characters, so matching the quoted label as a
// substring is an exact membership test.
fn category_pattern(category: &str) -> String {
    format!("%\"{}\"%", category)
}

pub async fn count_by_category(pool: &SqlitePool, category: &str) -> Result<i64> {
    let count = sqlx::query_scalar(
        "SELECT COUNT(*) FROM legislation_summaries WHERE categories LIKE ?",
    )
    .bind(category_pattern(category))
    .fetch_one(pool)
    .await?;
    Ok(count)
}

pub async fn list_by_category(
    pool: &SqlitePool,
    category: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<LegislationRecord>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM legislation_summaries WHERE categories LIKE ?
         ORDER BY created_at DESC, id ASC
         LIMIT ? OFFSET ?",
        RECORD_COLUMNS
    ))
    .bind(category_pattern(category))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    rows.iter().map(record_from_row).collect()
}

/// Legislation ids a user has saved, most recently saved first
pub async fn list_preferences(pool: &SqlitePool, user_id: &str) -> Result<Vec<String>> {
    let ids = sqlx::query_scalar(
        "SELECT legislation_id FROM user_preferences
         WHERE user_id = ?
         ORDER BY saved_at DESC, legislation_id ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Save a legislation id for a user. Idempotent; returns false if the
/// legislation does not exist.
pub async fn save_preference(
    pool: &SqlitePool,
    user_id: &str,
    legislation_id: &str,
) -> Result<bool> {
    if get_legislation(pool, legislation_id).await?.is_none() {
        return Ok(false);
    }

    sqlx::query(
        "INSERT OR IGNORE INTO user_preferences (user_id, legislation_id, saved_at)
         VALUES (?, ?, ?)",
    )
    .bind(user_id)
    .bind(legislation_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(true)
}

/// Remove a saved legislation id for a user. Idempotent.
pub async fn remove_preference(
    pool: &SqlitePool,
    user_id: &str,
    legislation_id: &str,
) -> Result<()> {
    sqlx::query("DELETE FROM user_preferences WHERE user_id = ? AND legislation_id = ?")
        .bind(user_id)
        .bind(legislation_id)
        .execute(pool)
        .await?;

    Ok(())
}
