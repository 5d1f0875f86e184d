use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::openai::ImageApi;

/// Produces an illustration URL for a headline.
///
/// Infallible by contract: failures degrade to an empty string.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> String;
}

/// Image generator backed by an image generation API
pub struct LlmImageGenerator {
    api: Arc<dyn ImageApi>,
}

impl LlmImageGenerator {
    pub fn new(api: Arc<dyn ImageApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ImageGenerator for LlmImageGenerator {
    async fn generate_image(&self, prompt: &str) -> String {
        match self.api.create_image(prompt).await {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Image could not be generated for {:?}: {}", prompt, e);
                String::new()
            }
        }
    }
}
