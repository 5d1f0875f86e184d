//! Template engine for prompt management using Jinja2 syntax.
//!
//! Templates live in `templates/prompts/` and are compiled into the binary,
//! so rendering does not depend on the working directory.

use minijinja::{Environment, Value};
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Embedded templates as (name relative to `templates/prompts/`, source)
const TEMPLATES: &[(&str, &str)] = &[
    (
        "content_generator/system.jinja",
        include_str!("../../../templates/prompts/content_generator/system.jinja"),
    ),
    (
        "content_generator/user.jinja",
        include_str!("../../../templates/prompts/content_generator/user.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for &(name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with the given context.
///
/// Trailing newlines from the template file are trimmed.
///
/// # Example
/// ```ignore
/// let mut ctx = HashMap::new();
/// ctx.insert("min_tags", Value::from(3));
/// ctx.insert("max_tags", Value::from(5));
///
/// let prompt = render_template("content_generator/user.jinja", &ctx)?;
/// ```
pub fn render_template(
    template_name: &str,
    ctx: &HashMap<&str, Value>,
) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    let render_ctx = Value::from_iter(ctx.iter().map(|(k, v)| (*k, v.clone())));

    template
        .render(render_ctx)
        .map(|rendered| rendered.trim_end().to_string())
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_missing_template() {
        let result = render_template("nonexistent.jinja", &HashMap::new());
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_all_embedded_templates_load() {
        for &(name, _) in TEMPLATES {
            assert!(get_environment().get_template(name).is_ok(), "{}", name);
        }
    }
}
