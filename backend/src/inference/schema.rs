//! Feature schema and one-hot encoding
//!
//! The schema file is the one bit-exact contract with the trained artifacts:
//! a sequence of feature names, one per line, in the column order the
//! scaler and classifier expect.

use std::path::Path;

use shared::WeatherObservation;

/// Ordered feature-name schema, loaded once at startup
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    features: Vec<String>,
}

impl FeatureSchema {
    /// Load the schema from a plain text file, one feature name per line.
    ///
    /// Falls back to the built-in default when the file is missing or
    /// unreadable, matching the trained artifacts' original column order.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let features: Vec<String> = contents
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from)
                    .collect();
                if features.is_empty() {
                    tracing::warn!(path = %path.display(), "Feature schema file is empty, using defaults");
                    Self::default()
                } else {
                    Self { features }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Feature schema file not found, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_names<I: IntoIterator<Item = S>, S: Into<String>>(names: I) -> Self {
        Self {
            features: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.features
    }

    /// Encode an observation into a single numeric row in schema order.
    ///
    /// The `temperature` column is copied verbatim (Fahrenheit); `season_*`
    /// and `condition_*` columns become 1.0/0.0 indicators. Any column whose
    /// suffix does not match the observation yields 0.0 — in particular the
    /// mild condition has no column of its own and encodes as an all-zero
    /// condition block, and out-of-vocabulary values never error.
    pub fn encode(&self, observation: &WeatherObservation) -> Vec<f64> {
        self.features
            .iter()
            .map(|name| match name.as_str() {
                "temperature" => observation.temperature,
                _ => {
                    if let Some(season) = name.strip_prefix("season_") {
                        indicator(observation.season.as_str() == season)
                    } else if let Some(condition) = name.strip_prefix("condition_") {
                        indicator(observation.condition.as_str() == condition)
                    } else {
                        0.0
                    }
                }
            })
            .collect()
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::from_names([
            "temperature",
            "season_fall",
            "season_spring",
            "season_summer",
            "season_winter",
            "condition_cold",
            "condition_hot",
            "condition_rain",
            "condition_snow",
        ])
    }
}

fn indicator(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}
