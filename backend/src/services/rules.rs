//! Rule-based fallback recommendations
//!
//! Deterministic heuristics used when no trained models are loaded. The
//! confidence values are fixed constants, not calibrated probabilities.

use shared::{Condition, RecommendationRecord, Season, Target, WeatherObservation};

/// Convert the input temperature to Celsius when it looks like Fahrenheit.
///
/// Values above 50 are treated as Fahrenheit and converted; values at or
/// below 50 are assumed to already be Celsius and left unchanged. The
/// discontinuity at exactly 50 is intentional and relied upon by callers.
pub fn normalize_temperature(temperature: f64) -> f64 {
    if temperature > 50.0 {
        (temperature - 32.0) * 5.0 / 9.0
    } else {
        temperature
    }
}

/// Evaluate all five clothing rules for an observation.
///
/// Pure function: identical input always yields identical output. All five
/// targets are always produced, in `Target::ALL` order.
pub fn evaluate(observation: &WeatherObservation) -> Vec<RecommendationRecord> {
    let temp_c = normalize_temperature(observation.temperature);
    let season = observation.season;
    let condition = observation.condition;

    Target::ALL
        .iter()
        .map(|&target| {
            let (recommend, if_true, if_false) = match target {
                Target::NeedsOuterwear => (
                    temp_c < 15.0
                        || matches!(condition, Condition::Rain | Condition::Snow | Condition::Cold),
                    0.9,
                    0.1,
                ),
                Target::ItemSweater => (
                    temp_c < 20.0 || matches!(season, Season::Winter | Season::Fall),
                    0.8,
                    0.2,
                ),
                Target::ItemShorts => (temp_c > 22.0 && !condition.is_precipitation(), 0.8, 0.3),
                Target::ItemBoots => (condition.is_precipitation() || temp_c < 5.0, 0.9, 0.2),
                Target::ItemHat => (
                    temp_c < 10.0
                        || matches!(condition, Condition::Snow | Condition::Cold)
                        || season == Season::Winter,
                    0.7,
                    0.3,
                ),
            };
            let confidence = if recommend { if_true } else { if_false };
            RecommendationRecord::scored(target, recommend, confidence)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(records: &'a [RecommendationRecord], target: Target) -> &'a RecommendationRecord {
        records.iter().find(|r| r.target == target).unwrap()
    }

    #[test]
    fn test_normalize_temperature_discontinuity_at_fifty() {
        // 50 is taken as Celsius and left alone; 50.01 is taken as
        // Fahrenheit and converted
        assert_eq!(normalize_temperature(50.0), 50.0);
        let converted = normalize_temperature(50.01);
        assert!((converted - 10.0).abs() < 0.01, "got {converted}");
    }

    #[test]
    fn test_normalize_temperature_fahrenheit_branch() {
        assert!((normalize_temperature(66.0) - 18.888).abs() < 0.01);
        assert!((normalize_temperature(32.0) - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_winter_snow_scenario() {
        let obs = WeatherObservation::new(30.0, Season::Winter, Condition::Snow);
        let records = evaluate(&obs);
        assert_eq!(records.len(), 5);

        let outerwear = record(&records, Target::NeedsOuterwear);
        assert!(outerwear.recommend);
        assert_eq!(outerwear.confidence, 0.9);

        let shorts = record(&records, Target::ItemShorts);
        assert!(!shorts.recommend);
        assert_eq!(shorts.confidence, 0.3);

        let boots = record(&records, Target::ItemBoots);
        assert!(boots.recommend);
        assert_eq!(boots.confidence, 0.9);
    }

    #[test]
    fn test_hot_summer_scenario() {
        // 95F converts to 35C: shorts yes, everything warm no
        let obs = WeatherObservation::new(95.0, Season::Summer, Condition::Hot);
        let records = evaluate(&obs);

        assert!(record(&records, Target::ItemShorts).recommend);
        assert!(!record(&records, Target::NeedsOuterwear).recommend);
        assert!(!record(&records, Target::ItemSweater).recommend);
        assert!(!record(&records, Target::ItemBoots).recommend);
        assert!(!record(&records, Target::ItemHat).recommend);
    }

    #[test]
    fn test_rain_blocks_shorts() {
        // Warm but raining: shorts rule requires no precipitation
        let obs = WeatherObservation::new(80.0, Season::Summer, Condition::Rain);
        let records = evaluate(&obs);
        assert!(!record(&records, Target::ItemShorts).recommend);
        assert!(record(&records, Target::ItemBoots).recommend);
        assert!(record(&records, Target::NeedsOuterwear).recommend);
    }

    #[test]
    fn test_fall_season_triggers_sweater() {
        // 25C is above the sweater temperature cutoff, season alone triggers
        let obs = WeatherObservation::new(25.0, Season::Fall, Condition::Mild);
        let records = evaluate(&obs);
        let sweater = record(&records, Target::ItemSweater);
        assert!(sweater.recommend);
        assert_eq!(sweater.confidence, 0.8);
    }

    #[test]
    fn test_output_order_is_fixed() {
        let obs = WeatherObservation::new(10.0, Season::Spring, Condition::Mild);
        let records = evaluate(&obs);
        let order: Vec<Target> = records.iter().map(|r| r.target).collect();
        assert_eq!(order, Target::ALL.to_vec());
    }

    #[test]
    fn test_no_errors_in_rule_records() {
        let obs = WeatherObservation::new(0.0, Season::Winter, Condition::Cold);
        assert!(evaluate(&obs).iter().all(|r| r.error.is_none()));
    }
}
