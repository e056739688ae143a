//! Sentiment Module - Text Classification Pipeline
//!
//! Loads the fitted artifacts and runs the normalization + inference
//! pipeline. Pure logic only; no HTTP, no rendering.

pub mod classifier;
pub mod predict;
pub mod stopwords;
pub mod vectorizer;

pub use classifier::LinearClassifier;
pub use predict::{predict_sentiment, Sentiment};
pub use stopwords::StopwordSet;
pub use vectorizer::TfidfVectorizer;
