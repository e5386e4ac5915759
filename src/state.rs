// src/state.rs

use std::sync::Arc;

use crate::llm::GroqClient;
use crate::sentiment::SentimentClassifier;

/// Read-only capability handles, constructed once in `main` and shared across
/// requests. `None` means the capability failed to initialize at startup:
/// a missing classifier makes `/api/plan` refuse traffic, a missing LLM
/// client only degrades suggestions to empty.
pub struct AppState {
    pub sentiment: Option<Arc<dyn SentimentClassifier>>,
    pub llm: Option<GroqClient>,
}

impl AppState {
    pub fn new(sentiment: Option<Arc<dyn SentimentClassifier>>, llm: Option<GroqClient>) -> Self {
        Self { sentiment, llm }
    }
}
