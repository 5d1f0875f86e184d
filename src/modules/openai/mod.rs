//! Generative API module
//!
//! Client for an OpenAI-compatible API (chat completions and image
//! generations) behind two traits so callers can swap in fakes.

mod client;
mod types;

pub use client::OpenAIClient;

use async_trait::async_trait;

use crate::core::error::Result;

/// Single-turn chat completion: system persona + user instruction -> reply text
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Errors with `AppError::Generation` when the upstream call fails or the
    /// reply carries no text.
    async fn complete(&self, system: &str, user: &str, temperature: f32) -> Result<String>;
}

/// Image generation from a text prompt, returning the hosted image URL
#[async_trait]
pub trait ImageApi: Send + Sync {
    /// Errors with `AppError::Image` on any upstream failure.
    async fn create_image(&self, prompt: &str) -> Result<String>;
}
