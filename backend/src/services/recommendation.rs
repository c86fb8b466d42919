//! Recommendation decision engine
//!
//! Turns a normalized weather observation into one record per clothing
//! target, scoring through the trained models when any are loaded and
//! falling back to the rule evaluator when none are.

use std::sync::Arc;

use shared::{RecommendationRecord, WeatherObservation};

use crate::inference::{FeatureSchema, InferenceError, ModelAsset, ModelRegistry};
use crate::services::rules;

/// Decision engine over a read-only model registry and feature schema.
///
/// Stateless per call; safe to share across concurrent requests.
#[derive(Clone)]
pub struct RecommendationService {
    registry: Arc<ModelRegistry>,
    schema: Arc<FeatureSchema>,
}

impl RecommendationService {
    pub fn new(registry: Arc<ModelRegistry>, schema: Arc<FeatureSchema>) -> Self {
        Self { registry, schema }
    }

    /// Whether the engine is running on rule-based fallback logic
    pub fn is_fallback(&self) -> bool {
        self.registry.is_empty()
    }

    /// Number of targets with loaded model assets
    pub fn loaded_models(&self) -> usize {
        self.registry.len()
    }

    /// Produce one recommendation record per target.
    ///
    /// The strategy is selected once per call: an empty registry routes
    /// every target through the rule evaluator; otherwise every target with
    /// a registry entry is scored through its model. A failure while scoring
    /// one target degrades only that target's record.
    pub fn recommend(
        &self,
        observation: &WeatherObservation,
        threshold: f64,
    ) -> Vec<RecommendationRecord> {
        if self.registry.is_empty() {
            return rules::evaluate(observation);
        }

        self.registry
            .iter()
            .map(|(target, asset)| {
                match self.score(asset, observation, threshold) {
                    Ok((recommend, confidence)) => {
                        RecommendationRecord::scored(target, recommend, confidence)
                    }
                    Err(e) => {
                        tracing::warn!(item = target.key(), error = %e, "Scoring failed for target");
                        RecommendationRecord::degraded(target, e.to_string())
                    }
                }
            })
            .collect()
    }

    /// Encode, scale, and classify one target.
    ///
    /// The recommendation comparison is strict: a probability exactly equal
    /// to the threshold does not recommend.
    fn score(
        &self,
        asset: &ModelAsset,
        observation: &WeatherObservation,
        threshold: f64,
    ) -> Result<(bool, f64), InferenceError> {
        let features = self.schema.encode(observation);
        let scaled = asset.scaler.transform(&features)?;
        let probability = asset.model.predict_proba(&scaled)?;
        Ok((probability > threshold, probability))
    }
}
