use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::contents::handlers::{self, ContentState};
use crate::features::contents::services::{ContentService, GenerationService};

/// Create routes for the contents feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(
    content_service: Arc<ContentService>,
    generation_service: Arc<GenerationService>,
) -> Router {
    let state = ContentState {
        content_service,
        generation_service,
    };

    Router::new()
        .route("/auto-generate", post(handlers::auto_generate))
        .route("/contents", get(handlers::list_contents))
        .route("/contents/{id}", get(handlers::get_content))
        .with_state(state)
}
