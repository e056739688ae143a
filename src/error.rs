//! Error handling

/// Artifact loading errors. Any of these at startup is fatal: the process
/// cannot serve predictions without a classifier, vectorizer and stopwords.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to download stopword corpus from {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Scraper collaborator errors. Caught at the call site and rendered as a
/// user-visible message; never crashes the process.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("request to scraper service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("scraper service returned status {0}")]
    Status(u16),
}
