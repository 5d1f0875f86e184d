use crate::core::error::{AppError, Result};
use crate::shared::constants::{DESCRIPTION_LABEL, PLACEHOLDER_TITLE, TAGS_LABEL, TITLE_LABEL};

use super::sanitizer::clean;

/// Fields extracted from a labeled model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedContent {
    pub title: String,
    pub description: String,
    /// Comma-joined, no surrounding spaces, no empty entries
    pub tags: String,
}

/// Value of the first line whose lowercased form contains `label`.
///
/// The value is everything after the first `:` on that line, so a second
/// colon stays part of the value. A matching line without any colon is an
/// unusable response and fails with `AppError::Generation`.
fn labeled_value<'a>(lines: &[&'a str], label: &str) -> Result<Option<&'a str>> {
    let Some(line) = lines.iter().find(|line| line.to_lowercase().contains(label)) else {
        return Ok(None);
    };

    line.split_once(':')
        .map(|(_, value)| Some(value))
        .ok_or_else(|| {
            AppError::Generation(format!(
                "line matching label {:?} has no value: {:?}",
                label, line
            ))
        })
}

/// Sanitize each comma-separated piece, drop the empty ones, rejoin with commas
fn normalize_tags(raw: &str) -> String {
    raw.split(',')
        .map(clean)
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse an unstructured headline response into title, description and tags.
///
/// Expected shape (order and extra lines do not matter):
///
/// ```text
/// Başlık: "Merkez Bankası faiz kararını açıkladı"
/// Açıklama: Kurul politika faizini sabit tuttu.
/// Etiketler: ekonomi, faiz, merkez bankası
/// ```
///
/// Labels are matched case-insensitively; extracted values keep their case.
/// Without a title line the title falls back to [`PLACEHOLDER_TITLE`];
/// missing description or tags become empty strings. A label line with no
/// `:` fails the whole parse.
pub fn parse_labeled_content(text: &str) -> Result<ParsedContent> {
    let lines: Vec<&str> = text.split('\n').collect();

    let title = labeled_value(&lines, TITLE_LABEL)?
        .map(clean)
        .unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());

    let description = labeled_value(&lines, DESCRIPTION_LABEL)?
        .map(clean)
        .unwrap_or_default();

    let tags = labeled_value(&lines, TAGS_LABEL)?
        .map(normalize_tags)
        .unwrap_or_default();

    tracing::debug!(
        "Parsed model response: title={:?}, description_len={}, tags={:?}",
        title,
        description.len(),
        tags
    );

    Ok(ParsedContent {
        title,
        description,
        tags,
    })
}
