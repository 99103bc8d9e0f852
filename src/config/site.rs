//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which file inside a post directory holds the post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Previously rendered `index.html`, scraped for metadata
    #[default]
    Html,
    /// `index.md` with YAML front-matter
    Markdown,
}

impl SourceFormat {
    /// File name looked up inside each post directory
    pub fn index_file(&self) -> &'static str {
        match self {
            SourceFormat::Html => "index.html",
            SourceFormat::Markdown => "index.md",
        }
    }
}

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub posts_dir: String,
    pub source: SourceFormat,

    // Extraction
    pub title_suffix: String,
    pub date_marker: String,
    pub excerpt_length: usize,

    // Date format for markdown front-matter dates
    pub date_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            posts_dir: "posts".to_string(),
            source: SourceFormat::Html,

            title_suffix: " — Wilbur Suero".to_string(),
            date_marker: "font-size:0.83255rem".to_string(),
            excerpt_length: 160,

            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.source, SourceFormat::Html);
        assert_eq!(config.title_suffix, " — Wilbur Suero");
        assert_eq!(config.excerpt_length, 160);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
posts_dir: content/posts
source: markdown
excerpt_length: 80
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.source, SourceFormat::Markdown);
        assert_eq!(config.excerpt_length, 80);
        // Unset keys keep their defaults
        assert_eq!(config.date_marker, "font-size:0.83255rem");
    }

    #[test]
    fn test_index_file() {
        assert_eq!(SourceFormat::Html.index_file(), "index.html");
        assert_eq!(SourceFormat::Markdown.index_file(), "index.md");
    }

    #[test]
    fn test_load_rejects_invalid_yaml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "source: [not, a, format]").unwrap();
        assert!(SiteConfig::load(&path).is_err());
    }
}
