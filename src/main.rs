use std::sync::Arc;

use review_analyzer::api::create_router;
use review_analyzer::config::Config;
use review_analyzer::gemini::{GeminiExtractor, KeyPointExtractor};
use review_analyzer::sentiment::{LexiconClassifier, SentimentClassifier};
use review_analyzer::store::ReviewStore;
use review_analyzer::{AppState, ReviewAnalyzer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = ReviewStore::connect(&config.database_url).await?;
    store.init().await?;

    let classifier: Arc<dyn SentimentClassifier> = Arc::new(LexiconClassifier::new());

    let extractor: Option<Arc<dyn KeyPointExtractor>> = match &config.gemini_api_key {
        Some(key) => Some(Arc::new(GeminiExtractor::new(
            key.clone(),
            config.gemini_model.clone(),
            config.gemini_timeout,
        )?)),
        None => {
            tracing::warn!("GEMINI_API_KEY is not set; key-point extraction disabled");
            None
        }
    };

    let state = AppState {
        analyzer: Arc::new(ReviewAnalyzer::new(classifier, extractor, store)),
    };

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "review analyzer listening");
    axum::serve(listener, app).await?;

    Ok(())
}
