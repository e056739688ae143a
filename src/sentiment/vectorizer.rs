//! TF-IDF Vectorizer
//!
//! Fitted transformer from normalized text to a sparse feature vector. The
//! vocabulary and IDF weights were learned at training time and are loaded
//! from a serialized artifact; this module only implements `transform`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

/// Sparse feature vector: (column index, weight) pairs, indices strictly
/// increasing.
pub type FeatureVector = Vec<(usize, f64)>;

/// Fitted TF-IDF vectorizer artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// token -> column index
    pub vocabulary: HashMap<String, usize>,
    /// Per-column inverse document frequency weights
    pub idf: Vec<f64>,
    /// Whether transform output is L2-normalized (matches the fit)
    #[serde(default = "default_l2")]
    pub l2_normalize: bool,
}

fn default_l2() -> bool {
    true
}

impl TfidfVectorizer {
    /// Load the artifact from a JSON file. Missing or corrupt file is a
    /// startup-fatal error for the caller.
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

    /// Number of columns in the feature space
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Transform a normalized text string into one sparse feature vector.
    ///
    /// Tokens are whitespace-separated; out-of-vocabulary tokens contribute
    /// nothing. An empty string yields an empty vector, which downstream
    /// code must accept.
    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in text.split_whitespace() {
            if let Some(&col) = self.vocabulary.get(token) {
                *counts.entry(col).or_insert(0) += 1;
            }
        }

        let mut features: FeatureVector = counts
            .into_iter()
            .map(|(col, count)| {
                let idf = self.idf.get(col).copied().unwrap_or(0.0);
                (col, count as f64 * idf)
            })
            .collect();
        features.sort_unstable_by_key(|&(col, _)| col);

        if self.l2_normalize {
            let norm = features.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, w) in features.iter_mut() {
                    *w /= norm;
                }
            }
        }

        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture() -> TfidfVectorizer {
        TfidfVectorizer {
            vocabulary: [("cat".to_string(), 0), ("great".to_string(), 1)]
                .into_iter()
                .collect(),
            idf: vec![1.0, 2.0],
            l2_normalize: false,
        }
    }

    #[test]
    fn test_transform_counts_and_weights() {
        let v = fixture();
        let features = v.transform("cat cat great");
        assert_eq!(features, vec![(0, 2.0), (1, 2.0)]);
    }

    #[test]
    fn test_transform_ignores_unknown_tokens() {
        let v = fixture();
        let features = v.transform("dog cat");
        assert_eq!(features, vec![(0, 1.0)]);
    }

    #[test]
    fn test_transform_empty_string_is_empty_vector() {
        let v = fixture();
        assert!(v.transform("").is_empty());
        assert!(v.transform("   ").is_empty());
    }

    #[test]
    fn test_l2_normalization() {
        let mut v = fixture();
        v.l2_normalize = true;
        let features = v.transform("cat great");
        let norm: f64 = features.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_file_parses_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"vocabulary":{{"cat":0}},"idf":[1.5],"l2_normalize":false}}"#
        )
        .unwrap();

        let v = TfidfVectorizer::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(v.dimension(), 1);
        assert_eq!(v.transform("cat"), vec![(0, 1.5)]);
    }

    #[test]
    fn test_from_file_corrupt_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = TfidfVectorizer::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }
}
