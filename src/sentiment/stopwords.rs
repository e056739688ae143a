//! Stopword corpus
//!
//! A set of lowercase words excluded from feature extraction. Loaded from a
//! local file, or downloaded from the configured corpus URL on first start
//! when no local copy exists.

use std::collections::HashSet;
use std::path::Path;

use crate::error::ArtifactError;

/// Immutable stopword set. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from an iterator of words (used by tests and the loaders)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a one-word-per-line corpus body
    fn from_corpus(body: &str) -> Self {
        Self::from_words(
            body.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        )
    }

    /// Load from a local file
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let body = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::from_corpus(&body))
    }

    /// Load from the local path, downloading the corpus when missing.
    ///
    /// The downloaded copy is cached to `path` so later starts are offline;
    /// a cache write failure is logged, not fatal.
    pub async fn load_or_fetch(path: &str, url: &str) -> Result<Self, ArtifactError> {
        if Path::new(path).exists() {
            return Self::from_file(path);
        }

        tracing::info!("Stopword corpus not found at {}, downloading from {}", path, url);

        let body = fetch_corpus(url).await.map_err(|source| ArtifactError::Download {
            url: url.to_string(),
            source,
        })?;

        if let Some(parent) = Path::new(path).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(path, &body) {
            tracing::warn!("Failed to cache stopword corpus to {}: {}", path, e);
        }

        Ok(Self::from_corpus(&body))
    }

    /// Case-sensitive membership check against the lowercase set
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

async fn fetch_corpus(url: &str) -> Result<String, reqwest::Error> {
    reqwest::get(url).await?.error_for_status()?.text().await
}
