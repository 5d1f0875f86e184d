use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::contents::models::Content;
use crate::shared::constants::{DEFAULT_LIMIT, DEFAULT_SKIP};

/// Response DTO for a content record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentResponseDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[schema(example = "ekonomi,faiz,merkez bankası")]
    pub tags: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Content> for ContentResponseDto {
    fn from(c: Content) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            tags: c.tags,
            image_url: c.image_url,
            created_at: c.created_at,
        }
    }
}

/// Offset pagination for the content list
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListContentsQuery {
    /// Number of records to skip (default: 0)
    #[serde(default = "default_skip")]
    pub skip: u32,

    /// Maximum number of records to return (default: 12)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    #[param(minimum = 1)]
    pub limit: u32,
}

fn default_skip() -> u32 {
    DEFAULT_SKIP
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
