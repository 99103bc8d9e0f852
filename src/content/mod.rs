//! Content module - post model, extraction and loading

mod error;
mod extract;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod slug;

pub use error::ContentError;
pub use extract::HtmlExtractor;
pub use frontmatter::FrontMatter;
pub use loader::PostLoader;
pub use markdown::{MarkdownExtractor, MarkdownRenderer};
pub use post::{
    Post, PostStatus, PLACEHOLDER_CONTENT, PLACEHOLDER_DATE, PLACEHOLDER_EXCERPT, UNTITLED,
};
