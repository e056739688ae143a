//! Sentiscope Server
//!
//! Web app that classifies short text snippets into Positive/Negative
//! sentiment with a pre-trained linear classifier over TF-IDF features.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       SENTISCOPE                          │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌──────────────┐   ┌───────────────────┐  │
//! │  │  Web UI  │──▶│  Predictor   │──▶│  Result Cards     │  │
//! │  │  (Axum)  │   │  (TF-IDF +   │   │  (HTML fragments) │  │
//! │  │          │   │   linear)    │   │                   │  │
//! │  └────┬─────┘   └──────────────┘   └───────────────────┘  │
//! │       │                ▲                                  │
//! │       ▼                │ loaded once at startup           │
//! │  ┌──────────┐   ┌──────┴───────────────────┐              │
//! │  │ Scraper  │   │ model.json  vectorizer.json  stopwords │
//! │  │ Service  │   └──────────────────────────┘              │
//! │  └──────────┘                                             │
//! └───────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod scraper;
mod sentiment;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scraper::{PostSource, ScraperClient};
use sentiment::{LinearClassifier, StopwordSet, TfidfVectorizer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "sentiscope=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Sentiscope starting...");

    // Load every process-wide resource before the listener binds. A missing
    // or corrupt artifact means the process cannot classify anything, so
    // failures here abort startup instead of surfacing per request.
    let stopwords = StopwordSet::load_or_fetch(&config.stopwords_path, &config.stopwords_url)
        .await
        .context("loading stopword corpus")?;
    let vectorizer = TfidfVectorizer::from_file(&config.vectorizer_path)
        .context("loading vectorizer artifact")?;
    let classifier = LinearClassifier::from_file(&config.model_path)
        .context("loading classifier artifact")?;

    tracing::info!(
        "Artifacts loaded: {} vocabulary terms, {} stopwords",
        vectorizer.dimension(),
        stopwords.len()
    );

    let scraper_client = ScraperClient::new(&config);
    tracing::info!("Scraper service: {}", config.scraper_url);

    // Build application state
    let state = AppState {
        stopwords: Arc::new(stopwords),
        vectorizer: Arc::new(vectorizer),
        classifier: Arc::new(classifier),
        scraper: Arc::new(scraper_client),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("binding listener")?;
    axum::serve(listener, app).await.context("serving")?;

    Ok(())
}

/// Shared application state: the resources from startup, read-only for the
/// process lifetime. Safe to share without locks because nothing mutates
/// them after load.
#[derive(Clone)]
pub struct AppState {
    pub stopwords: Arc<StopwordSet>,
    pub vectorizer: Arc<TfidfVectorizer>,
    pub classifier: Arc<LinearClassifier>,
    pub scraper: Arc<dyn PostSource>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(handlers::health::check))
        .route("/api/v1/analyze", post(handlers::analyze::analyze_text))
        .route("/api/v1/posts", post(handlers::analyze::analyze_posts))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
