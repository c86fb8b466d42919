//! Model artifact registry
//!
//! Holds the per-target (scaler, classifier) pairs. Populated once at
//! startup and read-only afterward, so concurrent reads need no
//! synchronization. Loading is best-effort: any missing or corrupt artifact
//! leaves that one target unavailable and the process running.

use std::path::{Path, PathBuf};

use shared::Target;

use super::linear::{LogisticModel, StandardScaler};

/// A loaded (scaler, classifier) pair for one target.
///
/// Both halves must load successfully or the target is treated as
/// unavailable; a partial pair is never used for scoring.
#[derive(Debug, Clone)]
pub struct ModelAsset {
    pub scaler: StandardScaler,
    pub model: LogisticModel,
}

/// Read-only registry of model assets, keyed by target
#[derive(Debug, Default)]
pub struct ModelRegistry {
    assets: Vec<(Target, ModelAsset)>,
}

impl ModelRegistry {
    /// Load assets for every known target from a directory containing
    /// `<target>_scaler.json` and `<target>_model.json` pairs.
    pub fn load(dir: &Path) -> Self {
        let mut assets = Vec::new();

        for target in Target::ALL {
            match load_asset(dir, target) {
                Ok(asset) => {
                    tracing::info!(item = target.key(), "Loaded model asset");
                    assets.push((target, asset));
                }
                Err(reason) => {
                    tracing::warn!(
                        item = target.key(),
                        %reason,
                        "Model asset unavailable, target will not be scored"
                    );
                }
            }
        }

        Self { assets }
    }

    /// Build a registry directly from assets (used in tests)
    pub fn from_assets(assets: Vec<(Target, ModelAsset)>) -> Self {
        Self { assets }
    }

    pub fn get(&self, target: Target) -> Option<&ModelAsset> {
        self.assets
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, asset)| asset)
    }

    /// Iterate loaded assets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Target, &ModelAsset)> {
        self.assets.iter().map(|(t, a)| (*t, a))
    }

    /// True iff no target has a loaded asset; this routes every target
    /// through the rule-based fallback
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }
}

fn load_asset(dir: &Path, target: Target) -> Result<ModelAsset, String> {
    let scaler: StandardScaler = read_json(&artifact_path(dir, target, "scaler"))?;
    let model: LogisticModel = read_json(&artifact_path(dir, target, "model"))?;
    Ok(ModelAsset { scaler, model })
}

fn artifact_path(dir: &Path, target: Target, kind: &str) -> PathBuf {
    dir.join(format!("{}_{}.json", target.key(), kind))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    serde_json::from_str(&contents).map_err(|e| format!("{}: {}", path.display(), e))
}
