pub mod footer;
pub mod text_link;
