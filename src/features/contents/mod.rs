//! AI generated news content.
//!
//! Generation is triggered synchronously by a request (manually or by an
//! external scheduler); stored records are read back through the list and
//! detail endpoints.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/auto-generate` | Generate text + image and store one record |
//! | GET | `/contents` | List records newest first (`skip`, `limit`) |
//! | GET | `/contents/{id}` | Get a single record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{
    ContentGenerator, ContentService, GenerationService, ImageGenerator, LlmContentGenerator,
    LlmImageGenerator,
};
