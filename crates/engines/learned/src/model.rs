//! Value models over encoded feature vectors.

use crate::features::{
    FLOOR_OFFSET, MARKER_OFFSET, NUM_FEATURES, PLAYER_BLOCK, SCORE_OFFSET, STAGING_FILL_OFFSET,
    WALL_OFFSET,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("model produced a non-finite value")]
    NonFinite,
    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse model file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A scalar position-value model. Implementations map an encoded feature
/// vector to an expected point differential for the perspective player.
pub trait ValueModel: Send {
    fn infer(&self, features: &[f32]) -> Result<f64, ModelError>;

    /// Short identifier for reports and logs.
    fn id(&self) -> &str;
}

/// Linear model: dot product over the feature vector plus a bias.
///
/// Good enough to order moves by material progress, and loadable from a
/// JSON weight dump produced by offline training.
#[derive(Debug, Clone)]
pub struct LinearModel {
    weights: Vec<f32>,
    bias: f32,
    id: String,
}

#[derive(Deserialize)]
struct LinearModelSpec {
    weights: Vec<f32>,
    #[serde(default)]
    bias: f32,
}

impl LinearModel {
    /// Hand-set weights approximating banked score plus wall progress.
    /// Used when no trained weight file is supplied.
    pub fn baseline() -> Self {
        let mut weights = vec![0.0f32; NUM_FEATURES];
        for (slot, sign) in [(0usize, 1.0f32), (1, -1.0)] {
            let base = slot * PLAYER_BLOCK;
            for cell in 0..25 {
                weights[base + WALL_OFFSET + cell] = sign * 1.8;
            }
            for row in 0..5 {
                weights[base + STAGING_FILL_OFFSET + row] = sign * (row as f32 + 1.0) * 0.5;
            }
            weights[base + FLOOR_OFFSET] = sign * -4.0;
            weights[base + MARKER_OFFSET] = sign * -0.5;
            weights[base + SCORE_OFFSET] = sign * 100.0;
        }
        Self {
            weights,
            bias: 0.0,
            id: "linear-baseline".to_string(),
        }
    }

    /// Loads weights from a JSON file: `{"weights": [...], "bias": 0.0}`.
    pub fn from_json_file(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path)?;
        let spec: LinearModelSpec = serde_json::from_str(&raw)?;
        if spec.weights.len() != NUM_FEATURES {
            return Err(ModelError::DimensionMismatch {
                expected: NUM_FEATURES,
                got: spec.weights.len(),
            });
        }
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("linear")
            .to_string();
        Ok(Self {
            weights: spec.weights,
            bias: spec.bias,
            id,
        })
    }
}

impl ValueModel for LinearModel {
    fn infer(&self, features: &[f32]) -> Result<f64, ModelError> {
        if features.len() != self.weights.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.weights.len(),
                got: features.len(),
            });
        }
        let dot: f32 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, f)| w * f)
            .sum();
        let value = f64::from(dot + self.bias);
        if !value.is_finite() {
            return Err(ModelError::NonFinite);
        }
        Ok(value)
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::encode;
    use mosaic_core::Position;

    #[test]
    fn baseline_prefers_wall_progress() {
        let model = LinearModel::baseline();
        let mut ahead = Position::empty();
        ahead.players[0].wall[0][0] = true;
        ahead.players[0].score = 5;
        let behind = Position::empty();

        let a = model.infer(&encode(&ahead, 0)).unwrap();
        let b = model.infer(&encode(&behind, 0)).unwrap();
        assert!(a > b);
    }

    #[test]
    fn baseline_is_antisymmetric_between_seats() {
        let model = LinearModel::baseline();
        let mut pos = Position::empty();
        pos.players[0].score = 12;
        pos.players[1].floor = vec![mosaic_core::TileColor::Red; 3];

        let p0 = model.infer(&encode(&pos, 0)).unwrap();
        let p1 = model.infer(&encode(&pos, 1)).unwrap();
        assert!((p0 + p1).abs() < 1e-6);
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let model = LinearModel::baseline();
        let err = model.infer(&[0.0; 3]).unwrap_err();
        assert!(matches!(err, ModelError::DimensionMismatch { .. }));
    }
}
