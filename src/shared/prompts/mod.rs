//! Prompt template management module.
//!
//! Templates are stored in `templates/prompts/` and use Jinja2 syntax.

pub mod engine;

pub use engine::{render_template, TemplateError};

use minijinja::Value;
use std::collections::HashMap;

use crate::shared::constants::{MAX_TAGS, MIN_TAGS};

/// Render the editor persona used as the system message for headline generation.
pub fn render_content_system_prompt() -> Result<String, TemplateError> {
    render_template("content_generator/system.jinja", &HashMap::new())
}

/// Render the headline/description/tags instruction.
pub fn render_content_user_prompt() -> Result<String, TemplateError> {
    let mut ctx: HashMap<&str, Value> = HashMap::new();
    ctx.insert("min_tags", Value::from(MIN_TAGS));
    ctx.insert("max_tags", Value::from(MAX_TAGS));

    render_template("content_generator/user.jinja", &ctx)
}
