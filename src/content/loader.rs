//! Post loader - lists and looks up posts under the posts directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::ContentError;
use super::extract::HtmlExtractor;
use super::markdown::MarkdownExtractor;
use super::post::Post;
use super::slug::{is_post_slug, is_safe_slug};
use crate::config::{SiteConfig, SourceFormat};

enum Reader {
    Html(HtmlExtractor),
    Markdown(Box<MarkdownExtractor>),
}

/// Loads posts from `<posts_dir>/<slug>/index.{html,md}`
pub struct PostLoader {
    posts_dir: PathBuf,
    format: SourceFormat,
    reader: Reader,
}

impl PostLoader {
    /// Create a loader over `posts_dir` using the markers in `config`
    pub fn new<P: AsRef<Path>>(posts_dir: P, config: &SiteConfig) -> Result<Self, ContentError> {
        let reader = match config.source {
            SourceFormat::Html => Reader::Html(HtmlExtractor::new(config)?),
            SourceFormat::Markdown => Reader::Markdown(Box::new(MarkdownExtractor::new(config))),
        };

        Ok(Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            format: config.source,
            reader,
        })
    }

    /// Load all posts, sorted by slug
    ///
    /// Posts that cannot be read are replaced by placeholders. An unreadable
    /// posts directory yields an empty list.
    pub fn load_posts(&self) -> Vec<Post> {
        self.post_slugs()
            .into_iter()
            .map(|slug| match self.read_post(&slug) {
                Ok(post) => post,
                Err(e) => {
                    tracing::warn!("Failed to load post {}: {}", slug, e);
                    Post::placeholder(&slug)
                }
            })
            .collect()
    }

    /// Load a single post, `None` when it cannot be read
    pub fn load_post(&self, slug: &str) -> Option<Post> {
        match self.read_post(slug) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!("Failed to load post {}: {}", slug, e);
                None
            }
        }
    }

    /// Names of the post directories, in ascending order
    pub fn post_slugs(&self) -> Vec<String> {
        let mut slugs = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    tracing::error!("Failed to read posts directory {:?}: {}", self.posts_dir, e);
                    return Vec::new();
                }
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) if is_post_slug(name) => slugs.push(name.to_string()),
                _ => tracing::debug!("Skipping non-post entry {:?}", entry.path()),
            }
        }

        slugs.sort();
        slugs
    }

    fn read_post(&self, slug: &str) -> Result<Post, ContentError> {
        if !is_safe_slug(slug) {
            return Err(ContentError::InvalidSlug(slug.to_string()));
        }

        let path = self.posts_dir.join(slug).join(self.format.index_file());
        let source =
            fs::read_to_string(&path).map_err(|source| ContentError::Io { path, source })?;

        Ok(match &self.reader {
            Reader::Html(extractor) => extractor.extract(&source, slug),
            Reader::Markdown(extractor) => extractor.extract(&source, slug),
        })
    }
}
