mod content_dto;

pub use content_dto::{ContentResponseDto, ListContentsQuery};
