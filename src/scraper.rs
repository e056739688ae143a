//! Scraper Client
//!
//! HTTP client for the external post-scraping service. The service's
//! internals (instance rotation, anti-bot handling) are its own concern;
//! this module depends only on the fetch contract and hides it behind
//! `PostSource` so handlers can be tested against a mock.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::error::ScrapeError;

/// One scraped post. Unknown fields from the service are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct FetchResponse {
    #[serde(default)]
    tweets: Vec<Post>,
}

/// Narrow seam over the scraping collaborator
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch up to `count` recent posts for a username, newest first
    async fn fetch_posts(&self, username: &str, count: u32) -> Result<Vec<Post>, ScrapeError>;
}

/// Scraper service client
pub struct ScraperClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ScraperClient {
    pub fn new(config: &Config) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.scraper_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.scraper_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }
}

#[async_trait]
impl PostSource for ScraperClient {
    async fn fetch_posts(&self, username: &str, count: u32) -> Result<Vec<Post>, ScrapeError> {
        let url = format!("{}/api/tweets", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("username", username),
                ("mode", "user"),
                ("number", &count.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScrapeError::Status(response.status().as_u16()));
        }

        let body: FetchResponse = response.json().await?;
        Ok(body.tweets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_response_parses_service_shape() {
        let body: FetchResponse = serde_json::from_str(
            r#"{"tweets":[{"text":"hello","link":"https://x/1","date":"2026-01-01"}]}"#,
        )
        .unwrap();
        assert_eq!(body.tweets.len(), 1);
        assert_eq!(body.tweets[0].text, "hello");
    }

    #[test]
    fn test_fetch_response_missing_tweets_is_empty() {
        let body: FetchResponse = serde_json::from_str("{}").unwrap();
        assert!(body.tweets.is_empty());
    }
}
