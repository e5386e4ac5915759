// src/llm/client.rs

//! Low-level Groq API client (OpenAI-compatible wire format).
//! No wrappers; just reqwest and Rust.

use anyhow::{Result, anyhow};
use reqwest::Client;
use serde_json::{Value, json};
use std::env;

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl GroqClient {
    pub fn new(api_key: String, api_base: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base,
        }
    }

    /// Build a client from `GROQ_API_KEY` / `GROQ_BASE_URL`. A missing key is
    /// an error here so the caller can degrade to empty suggestions instead of
    /// crashing the process.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GROQ_API_KEY").map_err(|_| anyhow!("GROQ_API_KEY not set"))?;
        let api_base =
            env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Ok(Self::new(api_key, api_base))
    }

    /// Single-turn chat completion returning the reply text.
    pub async fn chat_completion(
        &self,
        prompt: &str,
        model: &str,
        temperature: f32,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));

        let body = json!({
            "model": model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": temperature,
        });

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(anyhow!(
                "Groq chat completion failed: {}",
                resp.text().await.unwrap_or_default()
            ));
        }

        let resp_json: Value = resp.json().await?;

        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("No content in Groq chat response"))?
            .trim()
            .to_string();

        Ok(content)
    }
}
