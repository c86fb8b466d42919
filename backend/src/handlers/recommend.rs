//! HTTP handlers for outfit recommendation endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::{
    validate_location_query, validate_threshold, Condition, RecommendationRecord, Season,
    WeatherObservation, WeatherSnapshot,
};

use crate::error::{AppError, AppResult};
use crate::AppState;

fn default_threshold() -> f64 {
    0.5
}

/// Direct weather input
#[derive(Debug, Deserialize)]
pub struct WeatherRequest {
    pub temperature: f64,
    pub season: Season,
    pub condition: Condition,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Location-based input: a place name or full coordinates
#[derive(Debug, Deserialize, Validate)]
pub struct LocationRequest {
    pub location: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: Option<f64>,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub lon: Option<f64>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Recommendation response: one record per scored target plus the weather
/// the decision was based on
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RecommendationRecord>,
    pub weather_data: WeatherData,
}

/// Weather echoed back with the recommendations
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WeatherData {
    /// Caller-supplied observation, echoed unchanged
    Observed(WeatherObservation),
    /// Provider-derived (or mock) snapshot
    Fetched(WeatherSnapshot),
}

/// Get outfit recommendations based on direct weather input
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<WeatherRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    validate_threshold(request.threshold)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let observation =
        WeatherObservation::new(request.temperature, request.season, request.condition);
    let recommendations = state.engine.recommend(&observation, request.threshold);

    Ok(Json(RecommendationResponse {
        recommendations,
        weather_data: WeatherData::Observed(observation),
    }))
}

/// Get outfit recommendations based on location (uses the weather API)
pub async fn recommend_from_location(
    State(state): State<AppState>,
    Json(request): Json<LocationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    validate_threshold(request.threshold)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    validate_location_query(request.location.as_deref(), request.lat, request.lon)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let query = match (request.lat, request.lon) {
        (Some(lat), Some(lon)) => format!("{},{}", lat, lon),
        _ => request.location.unwrap_or_default(),
    };

    let snapshot = state.weather.fetch(&query).await;
    let recommendations = state
        .engine
        .recommend(&snapshot.observation(), request.threshold);

    Ok(Json(RecommendationResponse {
        recommendations,
        weather_data: WeatherData::Fetched(snapshot),
    }))
}
