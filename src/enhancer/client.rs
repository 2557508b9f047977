// src/enhancer/client.rs
//! Chat-completion provider seam. `GroqClient` talks to the hosted
//! OpenAI-compatible endpoint; tests substitute stub implementations.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::EnhanceError;

const CHAT_COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const MAX_TOKENS: u32 = 2048;
const TEMPERATURE: f32 = 0.4;

#[rocket::async_trait]
pub trait ChatProvider: Send + Sync {
    /// Issue one chat completion and return the raw text of the first
    /// choice. No retries, no caching.
    async fn complete(&self, system: &str, user: &str) -> Result<String, EnhanceError>;
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            api_key,
            model,
        })
    }
}

#[rocket::async_trait]
impl ChatProvider for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, EnhanceError> {
        let url = format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH);

        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        info!("Calling chat completion service: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EnhanceError::Timeout
                } else {
                    EnhanceError::Upstream(format!("Chat completion request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Chat completion error response ({}): {}", status, body);
            return Err(EnhanceError::Upstream(format!(
                "Provider returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            EnhanceError::Upstream(format!("Failed to parse provider response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| EnhanceError::Upstream("Provider returned no choices".to_string()))
    }
}
