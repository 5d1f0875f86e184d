use std::sync::Arc;

use crate::core::error::Result;
use crate::features::contents::models::CreateContent;
use crate::features::contents::services::{ContentGenerator, ContentService, ImageGenerator};

/// Composes text generation, image generation and storage into one record.
///
/// Steps run strictly in order: text, then image (prompted with the title),
/// then insert. A text failure aborts before anything is stored; an image
/// failure still stores the record with an empty `image_url`. Concurrent
/// calls are independent and may each create a record.
pub struct GenerationService {
    content_service: Arc<ContentService>,
    content_generator: Arc<dyn ContentGenerator>,
    image_generator: Arc<dyn ImageGenerator>,
}

impl GenerationService {
    pub fn new(
        content_service: Arc<ContentService>,
        content_generator: Arc<dyn ContentGenerator>,
        image_generator: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            content_service,
            content_generator,
            image_generator,
        }
    }

    /// Generate and store one record; returns its id
    pub async fn auto_generate(&self) -> Result<i64> {
        let content = self.content_generator.generate_content().await?;
        tracing::info!("Generated content: title={:?}", content.title);

        let image_url = self.image_generator.generate_image(&content.title).await;
        if image_url.is_empty() {
            tracing::warn!("Storing content without image: title={:?}", content.title);
        }

        self.content_service
            .insert(CreateContent {
                title: content.title,
                description: content.description,
                tags: content.tags,
                image_url,
            })
            .await
    }
}
