//! Weather Outfit Recommender - backend library
//!
//! Recommends clothing items for current weather conditions, supplied
//! directly or derived from a location lookup against a weather provider.
//! Scoring runs through trained per-item classifiers when their artifacts
//! are present, with a deterministic rule-based fallback when they are not.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod inference;
pub mod routes;
pub mod services;

pub use config::Config;

use services::{RecommendationService, WeatherService};

/// Default tracing directives when RUST_LOG is not set.
///
/// Must name this library crate: the binary is a thin wrapper and nearly
/// every event (registry loads, scoring failures, weather fallbacks) is
/// emitted from library modules.
pub const DEFAULT_LOG_DIRECTIVES: &str =
    "outfit_recommender_backend=debug,outfit_server=debug,tower_http=debug";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: RecommendationService,
    pub weather: WeatherService,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Weather Outfit Recommender API v1.0"
}
