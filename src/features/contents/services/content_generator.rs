use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::modules::openai::ChatCompletion;
use crate::shared::constants::GENERATION_TEMPERATURE;
use crate::shared::llm::{parse_labeled_content, ParsedContent};
use crate::shared::prompts;

/// Produces a headline, description and tags for a new record
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_content(&self) -> Result<ParsedContent>;
}

/// Content generator backed by a chat completion model.
///
/// Sends the fixed editor prompt and parses the free-text reply with
/// [`parse_labeled_content`]. Upstream failures and unparseable replies
/// surface as `AppError::Generation`; there is no retry.
pub struct LlmContentGenerator {
    chat: Arc<dyn ChatCompletion>,
}

impl LlmContentGenerator {
    pub fn new(chat: Arc<dyn ChatCompletion>) -> Self {
        Self { chat }
    }
}

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn generate_content(&self) -> Result<ParsedContent> {
        let system = prompts::render_content_system_prompt()
            .map_err(|e| AppError::Internal(format!("Failed to render system prompt: {}", e)))?;
        let user = prompts::render_content_user_prompt()
            .map_err(|e| AppError::Internal(format!("Failed to render user prompt: {}", e)))?;

        let reply = self
            .chat
            .complete(&system, &user, GENERATION_TEMPERATURE)
            .await?;

        if reply.trim().is_empty() {
            return Err(AppError::Generation(
                "completion returned empty text".to_string(),
            ));
        }

        tracing::debug!(
            "Completion received ({} chars): {}",
            reply.len(),
            reply.chars().take(300).collect::<String>()
        );

        parse_labeled_content(&reply)
    }
}
