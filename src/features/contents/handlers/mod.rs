pub mod content_handler;

pub use content_handler::{
    __path_auto_generate, __path_get_content, __path_list_contents, auto_generate, get_content,
    list_contents, ContentState,
};
