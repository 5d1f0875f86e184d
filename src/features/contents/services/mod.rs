mod content_generator;
mod content_service;
mod generation_service;
mod image_generator;

pub use content_generator::{ContentGenerator, LlmContentGenerator};
pub use content_service::ContentService;
pub use generation_service::GenerationService;
pub use image_generator::{ImageGenerator, LlmImageGenerator};
