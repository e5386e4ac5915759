// src/api/http/plan.rs

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::api::error::{ApiError, ApiResult};
use crate::config::CONFIG;
use crate::llm::{Suggestion, suggestions};
use crate::planner::{Emotion, Task, build_tasks};
use crate::sentiment::{SentimentLabel, truncate_chars};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PlanRequest {
    pub text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub sentiment: SentimentLabel,
    pub score: f64,
    pub detected_emotion: Emotion,
    pub task_count: usize,
    pub tasks: Vec<Task>,
    pub suggestions: Vec<Suggestion>,
    pub message: String,
}

const HECTIC_MESSAGE: &str = "Day looks hectic. I've suggested some breaks below.";
const BALANCED_MESSAGE: &str =
    "Your plan seems balanced. Here are some gentle wellness suggestions.";

/// One linear pass: classify sentiment, extract tasks, derive the emotion,
/// ask for suggestions, assemble the envelope. No state survives the request.
pub async fn plan_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PlanRequest>,
) -> ApiResult<Json<PlanResponse>> {
    let text = payload.text.unwrap_or_default();
    if text.is_empty() {
        return Err(ApiError::bad_request("No text provided"));
    }

    let classifier = state
        .sentiment
        .as_ref()
        .ok_or_else(|| ApiError::internal("Sentiment model not loaded"))?;

    // Sentiment runs over a bounded span; tasks come from the full text.
    let sentiment = classifier
        .classify(truncate_chars(&text, CONFIG.classify_max_chars))
        .await
        .map_err(|e| {
            error!("Sentiment classification failed: {e:#}");
            ApiError::internal("Sentiment model not loaded")
        })?;

    let tasks = build_tasks(&text);
    let workload = tasks.len();
    let hectic = workload >= CONFIG.hectic_threshold;
    let emotion = if sentiment.label == SentimentLabel::Negative || hectic {
        Emotion::Stressed
    } else {
        Emotion::Balanced
    };

    let suggestions = suggestions::generate(state.llm.as_ref(), &tasks, emotion).await;

    let message = if hectic { HECTIC_MESSAGE } else { BALANCED_MESSAGE };

    Ok(Json(PlanResponse {
        sentiment: sentiment.label,
        score: sentiment.score,
        detected_emotion: emotion,
        task_count: workload,
        tasks,
        suggestions,
        message: message.to_string(),
    }))
}
