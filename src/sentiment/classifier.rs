//! Linear Classifier
//!
//! Fitted binary linear model over the vectorizer's feature space. Loaded
//! from a serialized artifact; inference is a sparse dot product plus
//! intercept, thresholded at zero.

use serde::{Deserialize, Serialize};

use super::vectorizer::FeatureVector;
use crate::error::ArtifactError;

/// Fitted linear model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// Dense weight vector, one entry per feature column
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LinearClassifier {
    /// Load the artifact from a JSON file
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let body = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ArtifactError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Signed distance from the decision boundary. Feature indices outside
    /// the weight vector contribute nothing; an empty vector reduces to the
    /// intercept.
    pub fn decision(&self, features: &FeatureVector) -> f64 {
        let dot: f64 = features
            .iter()
            .filter_map(|&(col, value)| self.weights.get(col).map(|w| w * value))
            .sum();
        dot + self.intercept
    }

    /// Predict the class index: 0 below or on the boundary, 1 above
    pub fn predict(&self, features: &FeatureVector) -> u32 {
        if self.decision(features) > 0.0 {
            1
        } else {
            0
        }
    }
}
