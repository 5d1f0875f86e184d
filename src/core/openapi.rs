use utoipa::{Modify, OpenApi};

use crate::features::contents::{dtos as contents_dtos, handlers as contents_handlers};
use crate::shared::types::{ErrorResponse, StatusResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        contents_handlers::auto_generate,
        contents_handlers::list_contents,
        contents_handlers::get_content,
    ),
    components(
        schemas(
            // Shared
            StatusResponse,
            ErrorResponse,
            // Contents
            contents_dtos::ContentResponseDto,
        )
    ),
    tags(
        (name = "contents", description = "AI generated news content"),
    ),
    info(
        title = "Haberci API",
        version = "0.1.0",
        description = "AI generated news content API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
