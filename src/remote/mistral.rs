//! Mistral chat-completions client
//!
//! Uses a long-lived reqwest::Client for connection pooling. Every
//! request is bounded by a fixed timeout so one slow upstream call
//! cannot stall an interactive caller.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info, warn};

use crate::error::CategorizerError;
use crate::taxonomy::Category;
use crate::Result;
use async_trait::async_trait;

use super::RemoteBackend;

pub const MISTRAL_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CLASSIFY_TEMPERATURE: f32 = 0.3;
const QUERY_TEMPERATURE: f32 = 0.7;
const QUERY_MAX_TOKENS: u32 = 150;

const CLASSIFY_SYSTEM_PROMPT: &str = "You are an expense categorization assistant. \
Categorize expenses into one of these categories: food, transportation, housing, \
utilities, entertainment, shopping, travel, health, education, or other. \
Reply with just the category name in lowercase.";

const QUERY_SYSTEM_PROMPT: &str = "You are an expense management assistant. \
Provide helpful, concise responses about expense categories, finance management, \
and budgeting.";

/// Returned for queries when the service replies without any content.
pub const EMPTY_ANSWER_FALLBACK: &str = "I couldn't process your query. Please try again.";

/// Reusable Mistral client (connection-pooled)
pub struct MistralClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl MistralClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, MISTRAL_ENDPOINT.to_string())
    }

    /// Client pointed at a custom endpoint (self-hosted gateways, tests).
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            model,
            base_url,
        }
    }

    /// Issue one chat-completion request and pull out the assistant text.
    /// Returns `Ok(None)` when the payload parses but carries no content.
    async fn chat(&self, request: &ChatRequest) -> Result<Option<String>> {
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Mistral API request failed: {}", e);
                CategorizerError::RemoteUnavailable(format!("request error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Mistral API error response: {} {}", status, body);
            return Err(CategorizerError::RemoteUnavailable(format!(
                "status {}",
                status
            )));
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Mistral response: {}", e);
            CategorizerError::RemoteUnavailable(format!("parse error: {}", e))
        })?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

#[async_trait]
impl RemoteBackend for MistralClient {
    async fn classify_expense(&self, description: &str) -> Result<Category> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: CLASSIFY_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("Categorize this expense: {}", description),
                },
            ],
            temperature: CLASSIFY_TEMPERATURE,
            max_tokens: None,
        };

        info!("Calling Mistral API for categorization");

        let content = self.chat(&request).await?.ok_or_else(|| {
            CategorizerError::RemoteUnavailable("no choices in response".to_string())
        })?;

        // Substring scan over the taxonomy; never an unvalidated string.
        Ok(Category::from_model_reply(&content))
    }

    async fn answer_query(&self, question: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: QUERY_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: question.to_string(),
                },
            ],
            temperature: QUERY_TEMPERATURE,
            max_tokens: Some(QUERY_MAX_TOKENS),
        };

        info!("Calling Mistral API for query");

        match self.chat(&request).await? {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => {
                warn!("Mistral returned an empty answer");
                Ok(EMPTY_ANSWER_FALLBACK.to_string())
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
