//! Weather data models and normalization logic
//!
//! The recommender works over a small categorical vocabulary: four seasons
//! and five simplified conditions. Raw provider data is normalized into this
//! vocabulary before any decision logic runs.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Calendar season (Northern-Hemisphere mapping)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Derive the season from a calendar month (1-12).
    ///
    /// Northern-Hemisphere mapping only; hemisphere of the observation is
    /// ignored.
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Fall,
        }
    }

    /// Season for the current calendar month.
    pub fn current() -> Self {
        Season::from_month(Utc::now().month())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

/// Simplified weather condition used for outfit decisions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Cold,
    Hot,
    Rain,
    Snow,
    Mild,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Cold => "cold",
            Condition::Hot => "hot",
            Condition::Rain => "rain",
            Condition::Snow => "snow",
            Condition::Mild => "mild",
        }
    }

    /// True for precipitation conditions (rain or snow).
    pub fn is_precipitation(&self) -> bool {
        matches!(self, Condition::Rain | Condition::Snow)
    }
}

/// Classify a provider condition description and temperature into the
/// recommendation vocabulary.
///
/// Precedence, first match wins (case-insensitive substring match on the
/// description): rain-like words, then snow-like words, then temperature
/// bands. "light rain and snow flurries" therefore classifies as rain.
pub fn classify_condition(temp_celsius: f64, condition_text: &str) -> Condition {
    let text = condition_text.to_lowercase();

    if ["rain", "drizzle", "shower"].iter().any(|w| text.contains(w)) {
        return Condition::Rain;
    }
    if ["snow", "blizzard", "sleet"].iter().any(|w| text.contains(w)) {
        return Condition::Snow;
    }

    if temp_celsius <= 10.0 {
        Condition::Cold
    } else if temp_celsius >= 27.0 {
        Condition::Hot
    } else {
        Condition::Mild
    }
}

/// A normalized weather observation, the input to the decision engine.
///
/// Temperature is in Fahrenheit, matching the feature schema the trained
/// models were fit against. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    pub temperature: f64,
    pub season: Season,
    pub condition: Condition,
}

impl WeatherObservation {
    pub fn new(temperature: f64, season: Season, condition: Condition) -> Self {
        Self {
            temperature,
            season,
            condition,
        }
    }
}

/// Full weather report derived from the provider (or the mock substitute)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in Fahrenheit (what the models consume)
    pub temp: f64,
    /// Temperature in Celsius (what the provider reports)
    pub temp_c: f64,
    pub season: Season,
    pub condition: Condition,
    pub humidity: i32,
    pub wind_kph: f64,
    /// Raw provider condition description, lowercased
    pub condition_text: String,
    pub location: String,
    pub last_updated: String,
    /// Set when the provider was unavailable and mock data was substituted
    #[serde(default)]
    pub mock_data: bool,
}

impl WeatherSnapshot {
    /// Project the snapshot down to the engine's input shape.
    pub fn observation(&self) -> WeatherObservation {
        WeatherObservation::new(self.temp, self.season, self.condition)
    }
}
