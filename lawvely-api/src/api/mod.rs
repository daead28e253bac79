//! HTTP API handlers for lawvely-api

pub mod health;
pub mod legislation;
pub mod preferences;

pub use health::health_routes;
pub use legislation::{
    get_legislation, legislation_by_category, list_legislation, search_legislation,
};
pub use preferences::{list_preferences, remove_preference, save_preference};
