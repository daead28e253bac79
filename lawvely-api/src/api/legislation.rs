//! Legislation read endpoints: list, lookup, search, category filter
//!
//! All list-shaped endpoints paginate the same way: 1-indexed `page`
//! query parameter clamped into [1, total_pages], fixed page size,
//! newest records first.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::AppState;
use lawvely_common::db::{self, LegislationRecord};
use lawvely_common::taxonomy;

const PAGE_SIZE: i64 = 20;

/// Query parameters shared by the paginated endpoints
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,
}

/// Query parameters for text search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Paginated list response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegislationPage {
    pub total_results: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub items: Vec<LegislationRecord>,
}

/// Pagination metadata: clamped page and SQL offset
fn paginate(total_results: i64, requested_page: i64) -> (i64, i64, i64) {
    let total_pages = (total_results + PAGE_SIZE - 1) / PAGE_SIZE;
    let page = requested_page.max(1).min(total_pages.max(1));
    let offset = (page - 1) * PAGE_SIZE;
    (page, total_pages, offset)
}

fn page_response(
    total_results: i64,
    page: i64,
    total_pages: i64,
    items: Vec<LegislationRecord>,
) -> Json<LegislationPage> {
    Json(LegislationPage {
        total_results,
        page,
        page_size: PAGE_SIZE,
        total_pages,
        items,
    })
}

/// GET /api/legislation?page=N
pub async fn list_legislation(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<LegislationPage>, ApiError> {
    let total_results = db::count_legislation(&state.db).await?;
    let (page, total_pages, offset) = paginate(total_results, query.page);

    let items = db::list_legislation(&state.db, PAGE_SIZE, offset).await?;
    Ok(page_response(total_results, page, total_pages, items))
}

/// GET /api/legislation/:id
pub async fn get_legislation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LegislationRecord>, ApiError> {
    let record = db::get_legislation(&state.db, &id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(record))
}

/// GET /api/legislation/search?query=...&page=N
///
/// Case-insensitive substring match over title and both summaries.
pub async fn search_legislation(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<LegislationPage>, ApiError> {
    let needle = query
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingQuery)?
        .to_string();

    let total_results = db::count_search(&state.db, &needle).await?;
    let (page, total_pages, offset) = paginate(total_results, query.page);

    let items = db::search_legislation(&state.db, &needle, PAGE_SIZE, offset).await?;
    Ok(page_response(total_results, page, total_pages, items))
}

/// GET /api/legislation/category/:category?page=N
///
/// Only taxonomy labels are accepted; anything else is a client error
/// rather than an empty result.
pub async fn legislation_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<LegislationPage>, ApiError> {
    if !taxonomy::is_valid_category(&category) {
        return Err(ApiError::UnknownCategory(category));
    }

    let total_results = db::count_by_category(&state.db, &category).await?;
    let (page, total_pages, offset) = paginate(total_results, query.page);

    let items = db::list_by_category(&state.db, &category, PAGE_SIZE, offset).await?;
    Ok(page_response(total_results, page, total_pages, items))
}

/// API errors for the legislation endpoints
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    MissingQuery,
    UnknownCategory(String),
    Database(String),
}

impl From<lawvely_common::Error> for ApiError {
    fn from(e: lawvely_common::Error) -> Self {
        ApiError::Database(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Legislation summary with ID {} not found", id),
            ),
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                "Invalid or missing search query".to_string(),
            ),
            ApiError::UnknownCategory(category) => (
                StatusCode::BAD_REQUEST,
                format!("Unknown category: {}", category),
            ),
            ApiError::Database(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch data: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
