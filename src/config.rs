//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the serialized classifier artifact
    pub model_path: String,

    /// Path to the serialized vectorizer artifact
    pub vectorizer_path: String,

    /// Local path of the stopword corpus
    pub stopwords_path: String,

    /// Remote source for the stopword corpus (fetched when the local copy is missing)
    pub stopwords_url: String,

    /// Base URL of the scraper service
    pub scraper_url: String,

    /// Scraper request timeout in seconds
    pub scraper_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "artifacts/model.json".to_string()),

            vectorizer_path: env::var("VECTORIZER_PATH")
                .unwrap_or_else(|_| "artifacts/vectorizer.json".to_string()),

            stopwords_path: env::var("STOPWORDS_PATH")
                .unwrap_or_else(|_| "artifacts/stopwords-en.txt".to_string()),

            stopwords_url: env::var("STOPWORDS_URL").unwrap_or_else(|_| {
                "https://raw.githubusercontent.com/stopwords-iso/stopwords-en/master/stopwords-en.txt"
                    .to_string()
            }),

            scraper_url: env::var("SCRAPER_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),

            scraper_timeout_seconds: env::var("SCRAPER_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}
