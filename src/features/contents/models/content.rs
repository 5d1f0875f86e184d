use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a generated content record
#[derive(Debug, Clone, FromRow)]
pub struct Content {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Comma-joined labels
    pub tags: String,
    /// Empty when image generation failed
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied on insert; `id` and `created_at` are assigned by the store
#[derive(Debug, Clone)]
pub struct CreateContent {
    pub title: String,
    pub description: String,
    pub tags: String,
    pub image_url: String,
}
