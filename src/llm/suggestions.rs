// src/llm/suggestions.rs

//! Wellness-break suggestions from the chat model.
//!
//! Every failure mode on this path (missing client, HTTP error, no JSON block
//! in the reply, decode error) collapses to an empty list at the public
//! boundary. The request itself still answers 200 with `suggestions: []`.

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::client::GroqClient;
use crate::config::CONFIG;
use crate::planner::{Emotion, Task};

/// First bracket-delimited span in the reply, greedy, across lines.
static JSON_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

/// An LLM-proposed activity with a proposed time window. Not validated
/// against the user's tasks; overlap is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub start: String,
    pub end: String,
}

/// Generate wellness suggestions for the given schedule and emotional state.
///
/// With no tasks or no client there is nothing to ask, so this returns empty
/// without touching the network. Upstream failures are logged and also
/// converted to the empty list.
pub async fn generate(
    client: Option<&GroqClient>,
    tasks: &[Task],
    emotion: Emotion,
) -> Vec<Suggestion> {
    let Some(client) = client else {
        return Vec::new();
    };
    if tasks.is_empty() {
        return Vec::new();
    }

    match request_suggestions(client, tasks, emotion).await {
        Ok(suggestions) => suggestions,
        Err(e) => {
            warn!("Wellness suggestion generation failed: {e:#}");
            Vec::new()
        }
    }
}

async fn request_suggestions(
    client: &GroqClient,
    tasks: &[Task],
    emotion: Emotion,
) -> Result<Vec<Suggestion>> {
    let prompt = render_prompt(tasks, emotion);
    let reply = client
        .chat_completion(&prompt, &CONFIG.groq_model, CONFIG.llm_temperature)
        .await?;
    debug!("Raw model reply: {reply}");
    parse_suggestions(&reply)
}

/// Strict JSON decode of the first `[...]` span only; the model is told to
/// answer with bare JSON but often wraps it in prose anyway.
fn parse_suggestions(reply: &str) -> Result<Vec<Suggestion>> {
    let span = JSON_ARRAY
        .find(reply)
        .ok_or_else(|| anyhow!("no JSON array found in model reply"))?;
    Ok(serde_json::from_str(span.as_str())?)
}

fn render_prompt(tasks: &[Task], emotion: Emotion) -> String {
    let schedule: String = tasks
        .iter()
        .map(|t| {
            format!(
                "- {} ({} - {})\n",
                t.title,
                t.start.as_deref().unwrap_or("?"),
                t.end.as_deref().unwrap_or("?"),
            )
        })
        .collect();

    format!(
        r#"You are a mindful productivity assistant.
The user has this schedule:
{schedule}
The user's emotional state is: {emotion}.

Generate 3 short, time-specific wellness or rest activities that fit between tasks.
Each suggestion must include:
- "title": short label (e.g., "Tea break", "Stretch", "Quick walk")
- "start": start time (HH:MM 24h or 12h with am/pm)
- "end": end time (HH:MM 24h or 12h with am/pm)

Respond only with valid JSON - no extra text, no explanations.

Example:
[
  {{ "title": "Stretch break", "start": "10:45", "end": "10:55" }},
  {{ "title": "Mindful tea", "start": "15:10", "end": "15:25" }}
]"#
    )
}
