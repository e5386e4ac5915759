// src/main.rs

use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use wellplan::api::http::http_router;
use wellplan::config::CONFIG;
use wellplan::llm::GroqClient;
use wellplan::sentiment::{BertSentimentClassifier, SentimentClassifier};
use wellplan::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting wellplan microservice");
    info!("Suggestion model: {}", CONFIG.groq_model);

    // Both capability handles are built exactly once. The LLM client degrades
    // to empty suggestions when absent; the classifier gates /api/plan.
    let llm = match GroqClient::from_env() {
        Ok(client) => {
            info!("Groq client initialized");
            Some(client)
        }
        Err(e) => {
            warn!("Groq client unavailable, suggestions disabled: {e}");
            None
        }
    };

    let sentiment: Option<Arc<dyn SentimentClassifier>> =
        match BertSentimentClassifier::spawn().await {
            Ok(classifier) => {
                info!("Sentiment analysis model loaded");
                Some(Arc::new(classifier))
            }
            Err(e) => {
                error!("Error loading sentiment model: {e:#}");
                None
            }
        };

    let state = Arc::new(AppState::new(sentiment, llm));

    let app = http_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
