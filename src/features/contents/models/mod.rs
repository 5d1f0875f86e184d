mod content;

pub use content::{Content, CreateContent};
