//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    vocabulary_size: usize,
    stopword_count: usize,
}

/// Liveness plus a glance at the loaded artifacts
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        vocabulary_size: state.vectorizer.dimension(),
        stopword_count: state.stopwords.len(),
    })
}
