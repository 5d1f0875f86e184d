//! Helpers for turning free-form model output into stored fields.

pub mod parser;
pub mod sanitizer;

pub use parser::{parse_labeled_content, ParsedContent};
pub use sanitizer::clean;
