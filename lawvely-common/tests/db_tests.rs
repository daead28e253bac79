//! Integration tests for database initialization and queries

use chrono::{TimeZone, Utc};
use lawvely_common::db::{self, LegislationRecord};

fn sample_record(id: &str, title: &str, categories: &[&str]) -> LegislationRecord {
    LegislationRecord {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://www.legislation.gov.uk/{}", id),
        summary_of_legislation: format!("The {} relates to testing.", title),
        summary_of_sub_sections: format!("The subsections of {} cover fixtures.", title),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        enactment_date: Some("1 January 2020".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

async fn setup_pool() -> (tempfile::TempDir, sqlx::SqlitePool) {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let pool = db::init_database(&dir.path().join("lawvely.db"))
        .await
        .expect("Should initialize database");
    (dir, pool)
}

#[tokio::test]
async fn test_init_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("lawvely.db");
    assert!(!db_path.exists());

    let _pool = db::init_database(&db_path).await.unwrap();
    assert!(db_path.exists());
}

#[tokio::test]
async fn test_upsert_and_get_round_trip() {
    let (_dir, pool) = setup_pool().await;
    let record = sample_record("housing-act-2020", "Housing Act 2020", &["Housing"]);

    db::upsert_legislation(&pool, &record).await.unwrap();

    let fetched = db::get_legislation(&pool, "housing-act-2020")
        .await
        .unwrap()
        .expect("Record should exist");
    assert_eq!(fetched.title, "Housing Act 2020");
    assert_eq!(fetched.categories, vec!["Housing".to_string()]);
    assert_eq!(fetched.enactment_date.as_deref(), Some("1 January 2020"));
    assert_eq!(fetched.created_at, record.created_at);
}

#[tokio::test]
async fn test_upsert_replaces_existing_record() {
    let (_dir, pool) = setup_pool().await;
    let mut record = sample_record("energy-act", "Energy Act", &["Energy"]);
    db::upsert_legislation(&pool, &record).await.unwrap();

    record.categories = vec!["Energy".to_string(), "Environment".to_string()];
    db::upsert_legislation(&pool, &record).await.unwrap();

    assert_eq!(db::count_legislation(&pool).await.unwrap(), 1);
    let fetched = db::get_legislation(&pool, "energy-act").await.unwrap().unwrap();
    assert_eq!(fetched.categories.len(), 2);
}

#[tokio::test]
async fn test_get_missing_record_returns_none() {
    let (_dir, pool) = setup_pool().await;
    let fetched = db::get_legislation(&pool, "no-such-act").await.unwrap();
    assert!(fetched.is_none());
}

#[tokio::test]
async fn test_search_is_case_insensitive_over_all_text() {
    let (_dir, pool) = setup_pool().await;
    db::upsert_legislation(&pool, &sample_record("clean-air-act", "Clean Air Act", &["Environment"]))
        .await
        .unwrap();
    db::upsert_legislation(&pool, &sample_record("finance-act", "Finance Act", &["Finance"]))
        .await
        .unwrap();

    let hits = db::search_legislation(&pool, "CLEAN AIR", 20, 0).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "clean-air-act");

    // Matches summary text, not just titles
    assert_eq!(db::count_search(&pool, "subsections of Finance").await.unwrap(), 1);
    assert_eq!(db::count_search(&pool, "zxqv").await.unwrap(), 0);
}

#[tokio::test]
async fn test_search_treats_like_metacharacters_as_literals() {
    let (_dir, pool) = setup_pool().await;
    db::upsert_legislation(&pool, &sample_record("water-act", "Water Act", &["Environment"]))
        .await
        .unwrap();

    // Wildcard characters in the query must not match everything
    assert_eq!(db::count_search(&pool, "%").await.unwrap(), 0);
    assert_eq!(db::count_search(&pool, "_").await.unwrap(), 0);
    assert_eq!(db::count_search(&pool, "\\").await.unwrap(), 0);
    assert_eq!(db::count_search(&pool, "W%ter").await.unwrap(), 0);

    // A record containing the characters literally is still found
    let mut levy = sample_record("levy-act", "Levy Act", &["Finance"]);
    levy.summary_of_legislation = "Introduces a 5% levy on fuel_duty receipts.".to_string();
    db::upsert_legislation(&pool, &levy).await.unwrap();

    assert_eq!(db::count_search(&pool, "5%").await.unwrap(), 1);
    assert_eq!(db::count_search(&pool, "fuel_duty").await.unwrap(), 1);
    let hits = db::search_legislation(&pool, "5% levy", 20, 0).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "levy-act");
}

#[tokio::test]
async fn test_category_filter_matches_whole_labels_only() {
    let (_dir, pool) = setup_pool().await;
    db::upsert_legislation(&pool, &sample_record("rail-act", "Rail Act", &["Transportation"]))
        .await
        .unwrap();
    db::upsert_legislation(
        &pool,
        &sample_record("budget-act", "Budget Act", &["Finance", "Governance"]),
    )
    .await
    .unwrap();

    assert_eq!(db::count_by_category(&pool, "Finance").await.unwrap(), 1);
    assert_eq!(db::count_by_category(&pool, "Governance").await.unwrap(), 1);
    assert_eq!(db::count_by_category(&pool, "Health").await.unwrap(), 0);

    let hits = db::list_by_category(&pool, "Transportation", 20, 0).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "rail-act");
}

#[tokio::test]
async fn test_preference_round_trip_and_idempotence() {
    let (_dir, pool) = setup_pool().await;
    db::upsert_legislation(&pool, &sample_record("trade-act", "Trade Act", &["Trade"]))
        .await
        .unwrap();

    assert!(db::save_preference(&pool, "user-1", "trade-act").await.unwrap());
    // Saving again is a no-op, not an error
    assert!(db::save_preference(&pool, "user-1", "trade-act").await.unwrap());
    assert_eq!(
        db::list_preferences(&pool, "user-1").await.unwrap(),
        vec!["trade-act".to_string()]
    );

    // Saving a nonexistent legislation id is rejected
    assert!(!db::save_preference(&pool, "user-1", "ghost-act").await.unwrap());

    db::remove_preference(&pool, "user-1", "trade-act").await.unwrap();
    db::remove_preference(&pool, "user-1", "trade-act").await.unwrap();
    assert!(db::list_preferences(&pool, "user-1").await.unwrap().is_empty());
}
