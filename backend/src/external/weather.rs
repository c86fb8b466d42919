//! Weather API client for fetching current conditions
//!
//! Integrates with a WeatherAPI-style current-conditions endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Provider response for current conditions
#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub location: Option<ApiLocation>,
    pub current: Option<ApiCurrent>,
}

#[derive(Debug, Deserialize)]
pub struct ApiLocation {
    pub name: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiCurrent {
    pub temp_c: f64,
    pub temp_f: f64,
    pub humidity: i32,
    #[serde(default)]
    pub wind_kph: f64,
    pub condition: ApiCondition,
    #[serde(default)]
    pub last_updated: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiCondition {
    pub text: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            base_url,
        }
    }

    /// Whether an API key is configured at all
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Fetch current conditions for a location query (city name or
    /// "lat,lon" coordinates)
    pub async fn fetch_current(&self, location_query: &str) -> AppResult<CurrentResponse> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location_query),
                ("aqi", "no"),
            ])
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })
    }
}
