//! Integration tests for lawvely-api endpoints
//!
//! Drives the router directly with tower's `oneshot` against a seeded
//! temporary database; no listener is bound.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, TimeZone, Utc};
use lawvely_api::{build_router, AppState};
use lawvely_common::db::{self, LegislationRecord};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: temp database seeded with a handful of records
async fn setup_test_db() -> (tempfile::TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let pool = db::init_database(&dir.path().join("lawvely.db"))
        .await
        .expect("Should initialize database");

    let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let fixtures = [
        ("housing-act-2020", "Housing Act 2020", vec!["Housing"], 0),
        (
            "clean-air-act",
            "Clean Air Act",
            vec!["Environment", "Health"],
            1,
        ),
        ("finance-act-2019", "Finance Act 2019", vec!["Finance"], 2),
    ];

    for (id, title, categories, offset_hours) in fixtures {
        let record = LegislationRecord {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://www.legislation.gov.uk/{}", id),
            summary_of_legislation: format!("The {} relates to testing fixtures.", title),
            summary_of_sub_sections: format!("The subsections of {} cover examples.", title),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            enactment_date: None,
            created_at: base + Duration::hours(offset_hours),
        };
        db::upsert_legislation(&pool, &record)
            .await
            .expect("Should insert fixture");
    }

    (dir, pool)
}

fn setup_app(pool: SqlitePool) -> axum::Router {
    build_router(AppState::new(pool))
}

fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, pool) = setup_test_db().await;
    let app = setup_app(pool);

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "lawvely-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_list_returns_newest_first_with_pagination_metadata() {
    let (_dir, pool) = setup_test_db().await;
    let app = setup_app(pool);

    let response = app
        .oneshot(test_request("GET", "/api/legislation"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalResults"], 3);
    assert_eq!(body["page"], 1);
    assert_eq!(body["totalPages"], 1);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    // Newest fixture first
    assert_eq!(items[0]["id"], "finance-act-2019");
    assert_eq!(items[2]["id"], "housing-act-2020");
    // camelCase record fields on the wire
    assert!(items[0]["summaryOfLegislation"].is_string());
    assert!(items[0]["summaryOfSubSections"].is_string());
}

#[tokio::test]
async fn test_list_clamps_out_of_bounds_page() {
    let (_dir, pool) = setup_test_db().await;
    let app = setup_app(pool);

    let response = app
        .oneshot(test_request("GET", "/api/legislation?page=99"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_by_id() {
    let (_dir, pool) = setup_test_db().await;
    let app = setup_app(pool);

    let response = app
        .oneshot(test_request("GET", "/api/legislation/clean-air-act"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["id"], "clean-air-act");
    assert_eq!(body["title"], "Clean Air Act");
    assert_eq!(body["categories"], serde_json::json!(["Environment", "Health"]));
}

#[tokio::test]
async fn test_get_missing_id_returns_404_json() {
    let (_dir, pool) = setup_test_db().await;
    let app = setup_app(pool);

    let response = app
        .oneshot(test_request("GET", "/api/legislation/no-such-act"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("no-such-act"));
}

#[tokio::test]
async fn test_search_matches_titles_and_summaries() {
    let (_dir, pool) = setup_test_db().await;
    let app = setup_app(pool);

    let response = app
        .oneshot(test_request("GET", "/api/legislation/search?query=clean%20air"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalResults"], 1);
    assert_eq!(body["items"][0]["id"], "clean-air-act");
}

#[tokio::test]
async fn test_search_without_query_is_rejected() {
    let (_dir, pool) = setup_test_db().await;

    let response = setup_app(pool.clone())
        .oneshot(test_request("GET", "/api/legislation/search"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = setup_app(pool)
        .oneshot(test_request("GET", "/api/legislation/search?query=%20%20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_with_no_hits_returns_empty_page() {
    let (_dir, pool) = setup_test_db().await;
    let app = setup_app(pool);

    let response = app
        .oneshot(test_request("GET", "/api/legislation/search?query=zxqv"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalResults"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_category_filter() {
    let (_dir, pool) = setup_test_db().await;
    let app = setup_app(pool);

    let response = app
        .oneshot(test_request("GET", "/api/legislation/category/Health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["totalResults"], 1);
    assert_eq!(body["items"][0]["id"], "clean-air-act");
}

#[tokio::test]
async fn test_category_outside_taxonomy_is_rejected() {
    let (_dir, pool) = setup_test_db().await;
    let app = setup_app(pool);

    let response = app
        .oneshot(test_request("GET", "/api/legislation/category/Sports"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("Sports"));
}

#[tokio::test]
async fn test_preference_save_list_remove_flow() {
    let (_dir, pool) = setup_test_db().await;

    let response = setup_app(pool.clone())
        .oneshot(test_request(
            "PUT",
            "/api/users/user-1/preferences/housing-act-2020",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = setup_app(pool.clone())
        .oneshot(test_request("GET", "/api/users/user-1/preferences"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["userId"], "user-1");
    assert_eq!(body["legislationIds"], serde_json::json!(["housing-act-2020"]));

    let response = setup_app(pool.clone())
        .oneshot(test_request(
            "DELETE",
            "/api/users/user-1/preferences/housing-act-2020",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = setup_app(pool)
        .oneshot(test_request("GET", "/api/users/user-1/preferences"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert!(body["legislationIds"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_preference_save_for_unknown_legislation_is_404() {
    let (_dir, pool) = setup_test_db().await;
    let app = setup_app(pool);

    let response = app
        .oneshot(test_request(
            "PUT",
            "/api/users/user-1/preferences/ghost-act",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
