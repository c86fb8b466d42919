//! Recommendation targets and records
//!
//! The set of targets is fixed at startup; the engine never discovers new
//! targets at runtime.

use serde::{Deserialize, Serialize};

/// One clothing-recommendation decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    NeedsOuterwear,
    ItemSweater,
    ItemShorts,
    ItemBoots,
    ItemHat,
}

impl Target {
    /// All targets, in the order they are loaded and scored.
    pub const ALL: [Target; 5] = [
        Target::NeedsOuterwear,
        Target::ItemSweater,
        Target::ItemShorts,
        Target::ItemBoots,
        Target::ItemHat,
    ];

    /// Wire identifier, also the model artifact file stem.
    pub fn key(&self) -> &'static str {
        match self {
            Target::NeedsOuterwear => "needs_outerwear",
            Target::ItemSweater => "item_sweater",
            Target::ItemShorts => "item_shorts",
            Target::ItemBoots => "item_boots",
            Target::ItemHat => "item_hat",
        }
    }

    /// Human-readable item label: underscores become spaces and the
    /// "item "/"needs " prefixes are stripped.
    pub fn item_name(&self) -> String {
        self.key()
            .replace('_', " ")
            .replace("item ", "")
            .replace("needs ", "")
    }
}

/// Outcome of one clothing decision.
///
/// Every scored target yields exactly one record; on an internal failure the
/// record is degraded (recommend=false, confidence=0.0, error set) rather
/// than dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRecord {
    pub target: Target,
    pub recommend: bool,
    pub confidence: f64,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationRecord {
    /// A successfully scored record.
    pub fn scored(target: Target, recommend: bool, confidence: f64) -> Self {
        Self {
            target,
            recommend,
            confidence,
            item_name: target.item_name(),
            error: None,
        }
    }

    /// A degraded record for a target whose scoring failed.
    pub fn degraded(target: Target, error: String) -> Self {
        Self {
            target,
            recommend: false,
            confidence: 0.0,
            item_name: target.item_name(),
            error: Some(error),
        }
    }
}
