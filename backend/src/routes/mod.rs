//! Route definitions for the Weather Outfit Recommender

use axum::{routing::post, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Recommendations from direct weather input
        .route("/recommend", post(handlers::recommend))
        // Recommendations from a location lookup
        .route(
            "/recommend-from-location",
            post(handlers::recommend_from_location),
        )
}
