//! Weather acquisition service
//!
//! Fetches current conditions from the weather provider and normalizes them
//! into the engine's vocabulary. Never fails toward the caller: every
//! provider failure shape (missing key, network error, bad status, malformed
//! payload) substitutes a deterministic mock snapshot instead.

use chrono::Utc;
use shared::{classify_condition, Condition, Season, WeatherSnapshot};

use crate::external::weather::{CurrentResponse, WeatherClient};

/// Weather acquisition service
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Fetch and normalize current weather for a location query.
    ///
    /// The engine never sees a "no data" state: any provider failure yields
    /// the mock snapshot.
    pub async fn fetch(&self, location_query: &str) -> WeatherSnapshot {
        if !self.client.has_api_key() {
            tracing::warn!("Weather API key not configured, using mock data");
            return mock_snapshot(location_query);
        }

        match self.client.fetch_current(location_query).await {
            Ok(response) => match normalize(response, location_query) {
                Some(snapshot) => snapshot,
                None => {
                    tracing::warn!(
                        query = location_query,
                        "Weather response missing current section, using mock data"
                    );
                    mock_snapshot(location_query)
                }
            },
            Err(e) => {
                tracing::warn!(query = location_query, error = %e, "Weather fetch failed, using mock data");
                mock_snapshot(location_query)
            }
        }
    }
}

/// Map a provider response into a normalized snapshot.
///
/// Returns None when the `current` section is absent.
fn normalize(response: CurrentResponse, location_query: &str) -> Option<WeatherSnapshot> {
    let current = response.current?;
    let condition_text = current.condition.text.to_lowercase();
    let condition = classify_condition(current.temp_c, &condition_text);

    let location = match response.location {
        Some(loc) if !loc.country.is_empty() => format!("{}, {}", loc.name, loc.country),
        Some(loc) => loc.name,
        None => location_query.to_string(),
    };

    Some(WeatherSnapshot {
        temp: current.temp_f,
        temp_c: current.temp_c,
        season: Season::current(),
        condition,
        humidity: current.humidity,
        wind_kph: current.wind_kph,
        condition_text,
        location,
        last_updated: current.last_updated,
        mock_data: false,
    })
}

/// Deterministic stand-in weather when the provider is unavailable
fn mock_snapshot(location_query: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        temp: 66.0,
        temp_c: 19.0,
        season: Season::current(),
        condition: Condition::Mild,
        humidity: 56,
        wind_kph: 20.0,
        condition_text: "partly cloudy".to_string(),
        location: location_query.to_string(),
        last_updated: Utc::now().to_rfc3339(),
        mock_data: true,
    }
}
