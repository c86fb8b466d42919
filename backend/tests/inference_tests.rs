//! Model artifact loading and feature encoding tests
//!
//! Tests for the inference stack including:
//! - Best-effort registry loading (partial pairs, corrupt files)
//! - Feature schema loading and fallback
//! - End-to-end encode/scale/predict over loaded artifacts

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use outfit_recommender_backend::inference::{FeatureSchema, ModelRegistry};
use shared::{Condition, Season, Target, WeatherObservation};

fn write_scaler(dir: &Path, target: Target, columns: usize) {
    let scaler = serde_json::json!({
        "mean": vec![0.0; columns],
        "scale": vec![1.0; columns],
    });
    fs::write(
        dir.join(format!("{}_scaler.json", target.key())),
        scaler.to_string(),
    )
    .unwrap();
}

fn write_model(dir: &Path, target: Target, columns: usize, intercept: f64) {
    let model = serde_json::json!({
        "coefficients": vec![0.0; columns],
        "intercept": intercept,
    });
    fs::write(
        dir.join(format!("{}_model.json", target.key())),
        model.to_string(),
    )
    .unwrap();
}

// ============================================================================
// Registry loading
// ============================================================================

#[test]
fn test_load_complete_pairs() {
    let dir = TempDir::new().unwrap();
    for target in Target::ALL {
        write_scaler(dir.path(), target, 9);
        write_model(dir.path(), target, 9, 0.0);
    }

    let registry = ModelRegistry::load(dir.path());
    assert_eq!(registry.len(), 5);
    assert!(!registry.is_empty());
    for target in Target::ALL {
        assert!(registry.get(target).is_some());
    }
}

#[test]
fn test_missing_directory_loads_empty_registry() {
    let registry = ModelRegistry::load(Path::new("/nonexistent/models"));
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_partial_pair_leaves_target_unavailable() {
    let dir = TempDir::new().unwrap();
    // Sweater has only a scaler, boots has only a model
    write_scaler(dir.path(), Target::ItemSweater, 9);
    write_model(dir.path(), Target::ItemBoots, 9, 0.0);
    // Hat has the full pair
    write_scaler(dir.path(), Target::ItemHat, 9);
    write_model(dir.path(), Target::ItemHat, 9, 0.0);

    let registry = ModelRegistry::load(dir.path());
    assert_eq!(registry.len(), 1);
    assert!(registry.get(Target::ItemSweater).is_none());
    assert!(registry.get(Target::ItemBoots).is_none());
    assert!(registry.get(Target::ItemHat).is_some());
}

#[test]
fn test_corrupt_artifact_does_not_abort_other_targets() {
    let dir = TempDir::new().unwrap();
    for target in Target::ALL {
        write_scaler(dir.path(), target, 9);
        write_model(dir.path(), target, 9, 0.0);
    }
    // Corrupt one file of one pair
    fs::write(dir.path().join("item_shorts_model.json"), "not json {").unwrap();

    let registry = ModelRegistry::load(dir.path());
    assert_eq!(registry.len(), 4);
    assert!(registry.get(Target::ItemShorts).is_none());
    assert!(registry.get(Target::NeedsOuterwear).is_some());
}

#[test]
fn test_registry_iteration_follows_target_order() {
    let dir = TempDir::new().unwrap();
    for target in Target::ALL {
        write_scaler(dir.path(), target, 9);
        write_model(dir.path(), target, 9, 0.0);
    }

    let registry = ModelRegistry::load(dir.path());
    let order: Vec<Target> = registry.iter().map(|(t, _)| t).collect();
    assert_eq!(order, Target::ALL.to_vec());
}

// ============================================================================
// Feature schema loading
// ============================================================================

#[test]
fn test_schema_loads_from_file_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("features.txt");
    fs::write(&path, "temperature\nseason_winter\ncondition_snow\n").unwrap();

    let schema = FeatureSchema::load(&path);
    let names: Vec<&str> = schema.names().iter().map(String::as_str).collect();
    assert_eq!(names, vec!["temperature", "season_winter", "condition_snow"]);

    let obs = WeatherObservation::new(28.0, Season::Winter, Condition::Snow);
    assert_eq!(schema.encode(&obs), vec![28.0, 1.0, 1.0]);
}

#[test]
fn test_schema_skips_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("features.txt");
    fs::write(&path, "temperature\n\n  \nseason_fall\n").unwrap();

    let schema = FeatureSchema::load(&path);
    let names: Vec<&str> = schema.names().iter().map(String::as_str).collect();
    assert_eq!(names, vec!["temperature", "season_fall"]);
}

#[test]
fn test_missing_schema_file_falls_back_to_default() {
    let schema = FeatureSchema::load(Path::new("/nonexistent/features.txt"));
    assert_eq!(schema.len(), 9);
    assert_eq!(schema.names()[0], "temperature");
}

// ============================================================================
// End-to-end over loaded artifacts
// ============================================================================

#[test]
fn test_loaded_asset_scores_an_observation() {
    let dir = TempDir::new().unwrap();
    write_scaler(dir.path(), Target::NeedsOuterwear, 9);
    write_model(dir.path(), Target::NeedsOuterwear, 9, 1.5);

    let registry = ModelRegistry::load(dir.path());
    let asset = registry.get(Target::NeedsOuterwear).unwrap();

    let schema = FeatureSchema::default();
    let obs = WeatherObservation::new(30.0, Season::Winter, Condition::Cold);
    let scaled = asset.scaler.transform(&schema.encode(&obs)).unwrap();
    let proba = asset.model.predict_proba(&scaled).unwrap();

    // Zero coefficients: the probability is sigmoid(1.5) regardless of input
    assert!((proba - 0.8175).abs() < 0.001);
}
