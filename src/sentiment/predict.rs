//! Sentiment Predictor
//!
//! The core pipeline: normalize raw text, vectorize, classify, map the
//! class index to a label. Pure and deterministic given fixed artifacts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::classifier::LinearClassifier;
use super::stopwords::StopwordSet;
use super::vectorizer::TfidfVectorizer;

static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-zA-Z]").expect("valid regex"));

/// Binary sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Map a classifier output to a label. Class 0 is Negative; any other
    /// index maps to Positive. The model is binary by training contract, so
    /// the conflation of "any non-zero" with Positive is kept as-is.
    pub fn from_class_index(index: u32) -> Self {
        if index == 0 {
            Sentiment::Negative
        } else {
            Sentiment::Positive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }

    /// Card accent color
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#4CAF50",
            Sentiment::Negative => "#F44336",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "\u{1F60A}",
            Sentiment::Negative => "\u{1F61E}",
        }
    }
}

/// Normalize raw text for vectorization:
/// every non-ASCII-letter becomes a space, lowercase, split on whitespace,
/// drop stopwords, rejoin with single spaces.
pub fn normalize(text: &str, stopwords: &StopwordSet) -> String {
    let letters_only = NON_LETTER.replace_all(text, " ").to_lowercase();
    letters_only
        .split_whitespace()
        .filter(|token| !stopwords.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Predict the sentiment of a raw text snippet.
///
/// Empty-after-normalization input (all stopwords, or no letters at all)
/// still flows through the vectorizer and classifier and yields whatever
/// the fitted model produces for the empty feature vector.
pub fn predict_sentiment(
    text: &str,
    model: &LinearClassifier,
    vectorizer: &TfidfVectorizer,
    stopwords: &StopwordSet,
) -> Sentiment {
    let normalized = normalize(text, stopwords);
    let features = vectorizer.transform(&normalized);
    Sentiment::from_class_index(model.predict(&features))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn stopwords() -> StopwordSet {
        StopwordSet::from_words(["the", "is"])
    }

    fn vectorizer() -> TfidfVectorizer {
        TfidfVectorizer {
            vocabulary: HashMap::from([
                ("cat".to_string(), 0),
                ("great".to_string(), 1),
                ("awful".to_string(), 2),
            ]),
            idf: vec![1.0, 1.0, 1.0],
            l2_normalize: true,
        }
    }

    /// Positive iff "great" outweighs "awful"; empty input falls to the
    /// intercept side (Negative).
    fn model() -> LinearClassifier {
        LinearClassifier {
            weights: vec![0.0, 2.0, -2.0],
            intercept: -0.5,
        }
    }

    #[test]
    fn test_normalize_strips_punctuation_and_stopwords() {
        assert_eq!(normalize("The Cat is Great", &stopwords()), "cat great");
        assert_eq!(normalize("The Cat!!! is... Great?", &stopwords()), "cat great");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("The Cat is Great", &stopwords());
        assert_eq!(normalize(&once, &stopwords()), once);
    }

    #[test]
    fn test_normalize_digits_and_punctuation_only_yields_empty() {
        assert_eq!(normalize("12345 !!! ??? 678", &stopwords()), "");
    }

    #[test]
    fn test_stopword_match_uses_lowercased_tokens() {
        // "THE" lowercases to "the" before the stopword check
        assert_eq!(normalize("THE cat", &stopwords()), "cat");
    }

    #[test]
    fn test_predict_labels() {
        let (m, v, s) = (model(), vectorizer(), stopwords());
        assert_eq!(predict_sentiment("This is great!", &m, &v, &s), Sentiment::Positive);
        assert_eq!(predict_sentiment("This is awful!", &m, &v, &s), Sentiment::Negative);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let (m, v, s) = (model(), vectorizer(), stopwords());
        let first = predict_sentiment("The cat is great", &m, &v, &s);
        for _ in 0..10 {
            assert_eq!(predict_sentiment("The cat is great", &m, &v, &s), first);
        }
    }

    #[test]
    fn test_predict_no_letters_does_not_panic() {
        let (m, v, s) = (model(), vectorizer(), stopwords());
        // no letters at all -> empty feature vector -> intercept decides
        assert_eq!(predict_sentiment("1234 !!!", &m, &v, &s), Sentiment::Negative);
    }

    #[test]
    fn test_predict_all_stopwords_does_not_panic() {
        let (m, v, s) = (model(), vectorizer(), stopwords());
        assert_eq!(predict_sentiment("the is the is", &m, &v, &s), Sentiment::Negative);
    }

    #[test]
    fn test_class_index_mapping() {
        assert_eq!(Sentiment::from_class_index(0), Sentiment::Negative);
        assert_eq!(Sentiment::from_class_index(1), Sentiment::Positive);
        // any non-zero index maps to Positive, preserved behavior
        assert_eq!(Sentiment::from_class_index(7), Sentiment::Positive);
    }

    #[test]
    fn test_label_accessors() {
        assert_eq!(Sentiment::Positive.label(), "Positive");
        assert_eq!(Sentiment::Negative.label(), "Negative");
        assert_eq!(Sentiment::Positive.color(), "#4CAF50");
        assert_eq!(Sentiment::Negative.color(), "#F44336");
    }
}
