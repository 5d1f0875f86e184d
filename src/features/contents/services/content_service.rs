use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::contents::dtos::ContentResponseDto;
use crate::features::contents::models::{Content, CreateContent};
use crate::shared::constants::CONTENT_NOT_FOUND;

/// Storage for generated content records (append-only)
pub struct ContentService {
    pool: SqlitePool,
}

impl ContentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a record stamped with the current UTC time; returns its id
    pub async fn insert(&self, content: CreateContent) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO contents (title, description, tags, image_url, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&content.title)
        .bind(&content.description)
        .bind(&content.tags)
        .bind(&content.image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert content: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Content created: id={}, title={:?}", id, content.title);

        Ok(id)
    }

    /// List records newest first, skipping `skip` and returning at most `limit`
    pub async fn list_recent(&self, skip: u32, limit: u32) -> Result<Vec<ContentResponseDto>> {
        let contents = sqlx::query_as::<_, Content>(
            r#"
            SELECT id, title, description, tags, image_url, created_at
            FROM contents
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(limit))
        .bind(i64::from(skip))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contents: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(contents.into_iter().map(|c| c.into()).collect())
    }

    /// Get a record by id
    pub async fn get_by_id(&self, id: i64) -> Result<ContentResponseDto> {
        let content = sqlx::query_as::<_, Content>(
            r#"
            SELECT id, title, description, tags, image_url, created_at
            FROM contents
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get content by id: {:?}", e);
            AppError::Database(e)
        })?;

        content
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(CONTENT_NOT_FOUND.to_string()))
    }
}
