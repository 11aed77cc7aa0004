//! Ollama client for vision-model text extraction.

mod config;
mod prompts;

use std::time::Duration;

use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use config::LlmConfig;
pub use prompts::DEFAULT_OCR_PROMPT;

/// Upper bound on a single model call; vision models on CPU can be slow.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Client for an Ollama server hosting a vision model.
pub struct LlmClient {
    config: LlmConfig,
    client: Client,
}

/// Ollama chat API request format.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
    /// Base64-encoded image payloads.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<String>,
}

/// Ollama chat API response format.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<ModelInfo>,
}

#[derive(Deserialize)]
struct ModelInfo {
    name: String,
}

impl LlmClient {
    /// Create a new LLM client with the given configuration.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    /// Create a client with a non-default request timeout.
    pub fn with_timeout(config: LlmConfig, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Get the config.
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Check if the Ollama service is reachable.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.config.endpoint);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// List models installed on the Ollama server.
    pub async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let url = format!("{}/api/tags", self.config.endpoint);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LlmError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(LlmError::Api(format!("HTTP {}", resp.status())));
        }

        let tags: TagsResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Send an image with the extraction prompt and return the model's reply.
    pub async fn transcribe_image(&self, image: &[u8]) -> Result<String, LlmError> {
        self.chat_with_image(DEFAULT_OCR_PROMPT, image).await
    }

    /// Call the chat API with one user message carrying `prompt` and `image`.
    async fn chat_with_image(&self, prompt: &str, image: &[u8]) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
                images: vec![base64::engine::general_purpose::STANDARD.encode(image)],
            }],
            stream: false,
        };

        let url = format!("{}/api/chat", self.config.endpoint);
        debug!(
            "POST {} (model: {}, image: {} bytes)",
            url,
            self.config.model,
            image.len()
        );

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("HTTP {}: {}", status, body)));
        }

        let chat: ChatResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        Ok(chat.message.content)
    }
}

/// Errors that can occur talking to the model server.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Failed to connect to the model server (includes timeouts)
    #[error("Connection error: {0}")]
    Connection(String),
    /// Server answered with a non-success status
    #[error("API error: {0}")]
    Api(String),
    /// Response body was not what the chat API returns
    #[error("Parse error: {0}")]
    Parse(String),
}
