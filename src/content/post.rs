//! Post model

use serde::{Deserialize, Serialize};

use super::slug::title_from_slug;

/// Date shown on placeholder posts
pub const PLACEHOLDER_DATE: &str = "Unknown date";

/// Body of placeholder posts
pub const PLACEHOLDER_CONTENT: &str = "<p>Content not available.</p>";

/// Excerpt of placeholder posts
pub const PLACEHOLDER_EXCERPT: &str = "Content not available.";

/// Title used when the markup carries none
pub const UNTITLED: &str = "Untitled";

/// How a post came to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Read and parsed from its source file
    Extracted,
    /// Synthesized because the source file could not be read
    Placeholder,
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Directory name, `<digits>-<text>`
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as written in the source, or empty
    pub date: String,

    /// Body HTML fragment
    pub content: String,

    /// Plain-text excerpt of the first paragraph, or empty
    pub excerpt: String,

    /// Whether the post was read or synthesized
    pub status: PostStatus,
}

impl Post {
    /// Stand-in for a post whose source could not be read
    pub fn placeholder(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title_from_slug(slug),
            date: PLACEHOLDER_DATE.to_string(),
            content: PLACEHOLDER_CONTENT.to_string(),
            excerpt: PLACEHOLDER_EXCERPT.to_string(),
            status: PostStatus::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.status == PostStatus::Placeholder
    }

    /// Get the previous post in a list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next post in a list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        posts.get(pos + 1)
    }
}
