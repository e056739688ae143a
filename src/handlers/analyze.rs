//! Analysis handlers
//!
//! The two entry flows: direct text input, and fetch-posts-by-username.
//! Both are render-and-stop: every outcome (cards, validation warning,
//! scrape failure, no results) comes back as an HTML fragment with HTTP
//! 200, and nothing is kept across submissions.

use axum::{extract::State, response::Html, Json};
use serde::Deserialize;

use super::render;
use crate::sentiment::predict_sentiment;
use crate::AppState;

/// How many posts to request per username
const FETCH_COUNT: u32 = 5;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct PostsRequest {
    pub username: String,
}

/// Direct text flow: validate, predict once, render one card
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Html<String> {
    if request.text.trim().is_empty() {
        return Html(render::warning("Please enter some text!"));
    }

    let sentiment = predict_sentiment(
        &request.text,
        &state.classifier,
        &state.vectorizer,
        &state.stopwords,
    );

    Html(render::card(&request.text, sentiment))
}

/// Fetch flow: validate, fetch up to FETCH_COUNT posts, predict each in
/// returned order. Collaborator failures are rendered, never propagated.
pub async fn analyze_posts(
    State(state): State<AppState>,
    Json(request): Json<PostsRequest>,
) -> Html<String> {
    let username = request.username.trim();
    if username.is_empty() {
        return Html(render::warning("Please enter a valid username."));
    }

    let posts = match state.scraper.fetch_posts(username, FETCH_COUNT).await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::warn!("Fetch failed for {}: {}", username, e);
            return Html(render::error_box(&format!("Failed to fetch posts: {}", e)));
        }
    };

    if posts.is_empty() {
        return Html(render::notice("No posts found or the account is private."));
    }

    let cards: Vec<String> = posts
        .iter()
        .map(|post| {
            let sentiment = predict_sentiment(
                &post.text,
                &state.classifier,
                &state.vectorizer,
                &state.stopwords,
            );
            render::card(&post.text, sentiment)
        })
        .collect();

    Html(cards.concat())
}
