// =============================================================================
// PAGINATION
// =============================================================================

/// Default number of records skipped by the content list
pub const DEFAULT_SKIP: u32 = 0;

/// Default page size for the content list
pub const DEFAULT_LIMIT: u32 = 12;

// =============================================================================
// CONTENT GENERATION
// =============================================================================

/// Sampling temperature for the headline request
pub const GENERATION_TEMPERATURE: f32 = 0.7;

/// Requested tag count range, rendered into the user prompt
pub const MIN_TAGS: u32 = 3;
pub const MAX_TAGS: u32 = 5;

/// Label words searched (lowercased) in the model response
pub const TITLE_LABEL: &str = "başlık";
pub const DESCRIPTION_LABEL: &str = "açıklama";
pub const TAGS_LABEL: &str = "etiket";

/// Title stored when the response carries no title line
pub const PLACEHOLDER_TITLE: &str = "Başlık";

// =============================================================================
// USER-FACING MESSAGES
// =============================================================================

pub const CONTENT_NOT_FOUND: &str = "İçerik bulunamadı";
pub const CONTENT_GENERATED: &str = "İçerik üretildi.";
