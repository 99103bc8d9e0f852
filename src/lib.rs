//! wsblog: post extraction and listing for a static blog
//!
//! Each post lives in its own `<digits>-<text>` directory under the posts
//! directory. This crate recovers title, date, body and excerpt from the
//! rendered `index.html` (or a markdown `index.md`), lists every post and
//! looks up single posts by slug.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use content::{Post, PostLoader};

/// Configuration file looked up in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The blog site
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
    loader: PostLoader,
}

impl Blog {
    /// Open the site rooted at `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    /// Open the site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let loader = PostLoader::new(&posts_dir, &config)
            .with_context(|| format!("Invalid extraction settings in {}", CONFIG_FILE))?;

        tracing::debug!("Posts directory: {:?} ({:?})", posts_dir, config.source);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            loader,
        })
    }

    /// All posts, ascending by slug; unreadable posts become placeholders
    pub fn all_posts(&self) -> Vec<Post> {
        self.loader.load_posts()
    }

    /// A single post, `None` when it cannot be read
    pub fn post_by_slug(&self, slug: &str) -> Option<Post> {
        self.loader.load_post(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_blog_defaults_to_posts_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("posts").join("001-first");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), "<h1>First</h1><p>Body</p>").unwrap();

        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.posts_dir, tmp.path().join("posts"));

        let posts = blog.all_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "First");
        assert_eq!(blog.post_by_slug("001-first"), Some(posts[0].clone()));
    }

    #[test]
    fn test_blog_reads_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "posts_dir: articles\n").unwrap();
        let dir = tmp.path().join("articles").join("001-x");
        fs::create_dir_all(&dir).unwrap();

        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.posts_dir, tmp.path().join("articles"));
        assert!(blog.all_posts()[0].is_placeholder());
    }

    #[test]
    fn test_blog_without_posts_dir() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert!(blog.all_posts().is_empty());
    }
}
