//! OpenAI-compatible HTTP client
//!
//! Calls `/chat/completions` and `/images/generations` with bearer auth.
//! No retries and no client-side timeout: a stalled upstream stalls the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::types::{
    ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ImageGenerationRequest, ImageGenerationResponse,
};
use super::{ChatCompletion, ImageApi};
use crate::core::config::OpenAIConfig;
use crate::core::error::{AppError, Result};

/// Client for the generative API
pub struct OpenAIClient {
    http_client: Client,
    config: OpenAIConfig,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(concat!("haberci-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// POST a JSON body and decode a JSON reply. Errors are plain messages so
    /// each caller can wrap them in its own error kind.
    async fn post_json<B, R>(&self, path: &str, body: &B) -> std::result::Result<R, String>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| "OPENAI_API_KEY is not configured".to_string())?;

        let url = format!("{}{}", self.config.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("request to {} failed: {}", path, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(format!("{} returned {}: {}", path, status, message));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| format!("failed to decode {} response: {}", path, e))
    }
}

#[async_trait]
impl ChatCompletion for OpenAIClient {
    async fn complete(&self, system: &str, user: &str, temperature: f32) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.config.chat_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
        };

        let response: ChatCompletionResponse = self
            .post_json("/chat/completions", &request)
            .await
            .map_err(AppError::Generation)?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Generation("completion contained no message text".to_string()))
    }
}

#[async_trait]
impl ImageApi for OpenAIClient {
    async fn create_image(&self, prompt: &str) -> Result<String> {
        let request = ImageGenerationRequest {
            model: &self.config.image_model,
            prompt,
            size: &self.config.image_size,
            quality: &self.config.image_quality,
            n: 1,
        };

        let response: ImageGenerationResponse = self
            .post_json("/images/generations", &request)
            .await
            .map_err(AppError::Image)?;

        response
            .data
            .into_iter()
            .next()
            .and_then(|image| image.url)
            .ok_or_else(|| AppError::Image("response contained no image URL".to_string()))
    }
}
