//! Validation utilities for the Weather Outfit Recommender
//!
//! Boundary-layer checks for caller-supplied values. The decision engine
//! itself treats any float threshold as usable; these validators keep bad
//! requests out before the engine runs.

/// Validate a decision threshold is a finite value in [0, 1]
pub fn validate_threshold(threshold: f64) -> Result<(), &'static str> {
    if !threshold.is_finite() {
        return Err("Threshold must be a finite number");
    }
    if !(0.0..=1.0).contains(&threshold) {
        return Err("Threshold must be between 0 and 1");
    }
    Ok(())
}

/// Validate that a location request names a place or supplies full
/// coordinates
pub fn validate_location_query(
    location: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<(), &'static str> {
    if lat.is_some() != lon.is_some() {
        return Err("Both lat and lon must be provided together");
    }
    if lat.is_none() && location.map_or(true, |l| l.trim().is_empty()) {
        return Err("Either location name or coordinates (lat, lon) must be provided");
    }
    Ok(())
}
