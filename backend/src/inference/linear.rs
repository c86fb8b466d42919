//! Linear model inference
//!
//! Reimplements the inference half of the trained artifacts: a standard
//! feature scaler followed by a binary logistic-regression classifier, both
//! loaded from JSON parameter files.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inference failure for one target
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("Feature count mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Non-finite value produced at feature column {column}")]
    NonFinite { column: usize },
}

/// Fitted standard scaler: per-column mean and scale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Scale a feature row: `(x - mean) / scale` per column.
    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if row.len() != self.mean.len() || self.mean.len() != self.scale.len() {
            return Err(InferenceError::DimensionMismatch {
                expected: self.mean.len(),
                actual: row.len(),
            });
        }

        let mut scaled = Vec::with_capacity(row.len());
        for (column, ((x, mean), scale)) in
            row.iter().zip(&self.mean).zip(&self.scale).enumerate()
        {
            let value = (x - mean) / scale;
            if !value.is_finite() {
                return Err(InferenceError::NonFinite { column });
            }
            scaled.push(value);
        }
        Ok(scaled)
    }

    /// Identity scaler for a given column count (useful in tests)
    pub fn identity(columns: usize) -> Self {
        Self {
            mean: vec![0.0; columns],
            scale: vec![1.0; columns],
        }
    }
}

/// Binary logistic-regression classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    /// Positive-class probability for a scaled feature row.
    pub fn predict_proba(&self, row: &[f64]) -> Result<f64, InferenceError> {
        if row.len() != self.coefficients.len() {
            return Err(InferenceError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: row.len(),
            });
        }

        let z: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;

        Ok(sigmoid(z))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
