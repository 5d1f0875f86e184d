use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::contents::dtos::{ContentResponseDto, ListContentsQuery};
use crate::features::contents::services::{ContentService, GenerationService};
use crate::shared::constants::CONTENT_GENERATED;
use crate::shared::types::{ErrorResponse, StatusResponse};

/// State for content handlers
#[derive(Clone)]
pub struct ContentState {
    pub content_service: Arc<ContentService>,
    pub generation_service: Arc<GenerationService>,
}

/// Generate and store a new content record
///
/// Calls the text model, then the image model with the generated title, then
/// stores the result. Meant for manual triggers or an external cron.
#[utoipa::path(
    post,
    path = "/auto-generate",
    responses(
        (status = 200, description = "Content generated", body = StatusResponse),
        (status = 500, description = "Generation or storage failed", body = ErrorResponse)
    ),
    tag = "contents"
)]
pub async fn auto_generate(State(state): State<ContentState>) -> Result<Json<StatusResponse>> {
    state.generation_service.auto_generate().await?;
    Ok(Json(StatusResponse::ok(CONTENT_GENERATED)))
}

/// List content records, newest first
#[utoipa::path(
    get,
    path = "/contents",
    params(ListContentsQuery),
    responses(
        (status = 200, description = "Content records", body = Vec<ContentResponseDto>),
        (status = 422, description = "Invalid pagination parameters", body = ErrorResponse)
    ),
    tag = "contents"
)]
pub async fn list_contents(
    State(state): State<ContentState>,
    AppQuery(query): AppQuery<ListContentsQuery>,
) -> Result<Json<Vec<ContentResponseDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contents = state
        .content_service
        .list_recent(query.skip, query.limit)
        .await?;
    Ok(Json(contents))
}

/// Get a content record by id
#[utoipa::path(
    get,
    path = "/contents/{id}",
    params(
        ("id" = i64, Path, description = "Content ID")
    ),
    responses(
        (status = 200, description = "Content found", body = ContentResponseDto),
        (status = 404, description = "Content not found", body = ErrorResponse)
    ),
    tag = "contents"
)]
pub async fn get_content(
    State(state): State<ContentState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ContentResponseDto>> {
    let content = state.content_service.get_by_id(id).await?;
    Ok(Json(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contents::models::CreateContent;
    use crate::features::contents::routes::routes;
    use crate::features::contents::services::{ContentGenerator, ImageGenerator};
    use crate::shared::test_helpers::{
        test_pool, FailingContentGenerator, StaticContentGenerator, StaticImageGenerator,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    struct Harness {
        server: TestServer,
        content_service: Arc<ContentService>,
    }

    async fn harness_with(
        content_generator: Arc<dyn ContentGenerator>,
        image_generator: Arc<dyn ImageGenerator>,
    ) -> Harness {
        let content_service = Arc::new(ContentService::new(test_pool().await));
        let generation_service = Arc::new(GenerationService::new(
            content_service.clone(),
            content_generator,
            image_generator,
        ));
        let server =
            TestServer::new(routes(content_service.clone(), generation_service)).unwrap();

        Harness {
            server,
            content_service,
        }
    }

    async fn harness() -> Harness {
        harness_with(
            Arc::new(StaticContentGenerator::new("T", "D", "a,b")),
            Arc::new(StaticImageGenerator::new("http://img")),
        )
        .await
    }

    async fn seed(service: &ContentService, count: usize) {
        for i in 0..count {
            service
                .insert(CreateContent {
                    title: format!("Haber {}", i + 1),
                    description: String::new(),
                    tags: "gündem".to_string(),
                    image_url: String::new(),
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_auto_generate_returns_ack_and_stores_record() {
        let h = harness().await;

        let response = h.server.post("/auto-generate").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "status": "ok",
            "message": "İçerik üretildi."
        }));

        let stored = h.content_service.list_recent(0, 12).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "T");
        assert_eq!(stored[0].description, "D");
        assert_eq!(stored[0].tags, "a,b");
        assert_eq!(stored[0].image_url, "http://img");
    }

    #[tokio::test]
    async fn test_auto_generate_failure_is_server_error() {
        let h = harness_with(
            Arc::new(FailingContentGenerator),
            Arc::new(StaticImageGenerator::new("http://img")),
        )
        .await;

        let response = h.server.post("/auto-generate").expect_failure().await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(h.content_service.list_recent(0, 12).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_contents_defaults_to_twelve_newest() {
        let h = harness().await;
        seed(&h.content_service, 15).await;

        let response = h.server.get("/contents").await;

        response.assert_status_ok();
        let body = response.json::<Vec<Value>>();
        assert_eq!(body.len(), 12);
        assert_eq!(body[0]["id"], 15);
        assert_eq!(body[0]["title"], "Haber 15");
        for field in ["id", "title", "description", "tags", "image_url", "created_at"] {
            assert!(body[0].get(field).is_some(), "missing field {}", field);
        }
    }

    #[tokio::test]
    async fn test_list_contents_second_page() {
        let h = harness().await;
        seed(&h.content_service, 15).await;

        let response = h
            .server
            .get("/contents")
            .add_query_param("skip", 12)
            .add_query_param("limit", 12)
            .await;

        response.assert_status_ok();
        let ids: Vec<i64> = response
            .json::<Vec<ContentResponseDto>>()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_list_contents_empty_store() {
        let h = harness().await;

        let response = h.server.get("/contents").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_contents_rejects_bad_parameters() {
        let h = harness().await;

        let zero_limit = h
            .server
            .get("/contents")
            .add_query_param("limit", 0)
            .expect_failure()
            .await;
        let negative_skip = h
            .server
            .get("/contents")
            .add_query_param("skip", -1)
            .expect_failure()
            .await;

        zero_limit.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        negative_skip.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(negative_skip.json::<Value>()["detail"].is_string());
    }

    #[tokio::test]
    async fn test_get_content_found() {
        let h = harness().await;
        seed(&h.content_service, 2).await;

        let response = h.server.get("/contents/2").await;

        response.assert_status_ok();
        let content = response.json::<ContentResponseDto>();
        assert_eq!(content.id, 2);
        assert_eq!(content.title, "Haber 2");
    }

    #[tokio::test]
    async fn test_get_content_not_found() {
        let h = harness().await;

        let response = h.server.get("/contents/42").expect_failure().await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&serde_json::json!({ "detail": "İçerik bulunamadı" }));
    }

    #[tokio::test]
    async fn test_get_content_non_numeric_id() {
        let h = harness().await;

        let response = h.server.get("/contents/abc").expect_failure().await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
