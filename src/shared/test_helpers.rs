use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

/// Single-connection in-memory SQLite pool without the schema applied.
///
/// One connection only: every new in-memory connection is a fresh database.
pub async fn memory_pool() -> SqlitePool {
    let options: SqliteConnectOptions = "sqlite::memory:".parse().unwrap();

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap()
}

/// In-memory pool with migrations applied
pub async fn test_pool() -> SqlitePool {
    let pool = memory_pool().await;
    crate::core::database::initialize_schema(&pool)
        .await
        .unwrap();
    pool
}

pub use fakes::*;

mod fakes {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::core::error::{AppError, Result};
    use crate::features::contents::{ContentGenerator, ImageGenerator};
    use crate::shared::llm::ParsedContent;

    /// Content generator returning fixed fields
    pub struct StaticContentGenerator {
        content: ParsedContent,
    }

    impl StaticContentGenerator {
        pub fn new(title: &str, description: &str, tags: &str) -> Self {
            Self {
                content: ParsedContent {
                    title: title.to_string(),
                    description: description.to_string(),
                    tags: tags.to_string(),
                },
            }
        }
    }

    #[async_trait]
    impl ContentGenerator for StaticContentGenerator {
        async fn generate_content(&self) -> Result<ParsedContent> {
            Ok(self.content.clone())
        }
    }

    /// Content generator whose upstream is always down
    pub struct FailingContentGenerator;

    #[async_trait]
    impl ContentGenerator for FailingContentGenerator {
        async fn generate_content(&self) -> Result<ParsedContent> {
            Err(AppError::Generation("upstream unavailable".to_string()))
        }
    }

    /// Image generator returning a fixed URL and recording prompts
    pub struct StaticImageGenerator {
        url: String,
        prompts: Mutex<Vec<String>>,
    }

    impl StaticImageGenerator {
        pub fn new(url: &str) -> Self {
            Self {
                url: url.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ImageGenerator for StaticImageGenerator {
        async fn generate_image(&self, prompt: &str) -> String {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.url.clone()
        }
    }
}
