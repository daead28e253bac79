//! lawvely-api library - HTTP read API for legislation summaries
//!
//! Serves the records produced by lawvely-seed: listing, single-record
//! lookup, text search, category filtering (all paginated), and per-user
//! saved-legislation preferences.

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, put};

    Router::new()
        .route("/api/legislation", get(api::list_legislation))
        .route("/api/legislation/search", get(api::search_legislation))
        .route(
            "/api/legislation/category/:category",
            get(api::legislation_by_category),
        )
        .route("/api/legislation/:id", get(api::get_legislation))
        .route(
            "/api/users/:user_id/preferences",
            get(api::list_preferences),
        )
        .route(
            "/api/users/:user_id/preferences/:id",
            put(api::save_preference).delete(api::remove_preference),
        )
        .merge(api::health_routes())
        .with_state(state)
}
