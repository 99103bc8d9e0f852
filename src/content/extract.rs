//! Metadata extraction from previously rendered post HTML
//!
//! The rendered pages follow a fixed layout: a `<title>` (or `<h1>`), a small
//! date paragraph, the body, then either an `<hr>` or the flex navigation
//! list. Extraction is pattern matching over that layout and never fails;
//! anything missing falls back to a default.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::ContentError;
use super::post::{Post, PostStatus, UNTITLED};
use crate::config::SiteConfig;
use crate::helpers::excerpt;

lazy_static! {
    static ref TITLE: Regex = Regex::new(r"(?s)<title>(.*?)</title>").unwrap();
    static ref H1: Regex = Regex::new(r"(?s)<h1[^>]*>(.*?)</h1>").unwrap();
}

/// Markers that end the post body
const CONTENT_TERMINATORS: [&str; 2] = ["<hr", r#"<ul style="display:flex"#];

/// Extracts post fields from rendered HTML
#[derive(Debug, Clone)]
pub struct HtmlExtractor {
    title_suffix: String,
    date: Regex,
    excerpt_length: usize,
}

impl HtmlExtractor {
    /// Create an extractor for the markers in `config`
    pub fn new(config: &SiteConfig) -> Result<Self, ContentError> {
        let marker = regex::escape(&config.date_marker);
        let date = Regex::new(&format!(
            r#"(?s)<p\s[^>]*style\s*=\s*(?:"[^"]*{marker}[^"]*"|'[^']*{marker}[^']*')[^>]*>(.*?)</p>"#
        ))?;

        Ok(Self {
            title_suffix: config.title_suffix.clone(),
            date,
            excerpt_length: config.excerpt_length,
        })
    }

    /// Extract a post from `html`
    pub fn extract(&self, html: &str, slug: &str) -> Post {
        let title = self.title(html);

        let (date, start) = match self.date.captures(html) {
            Some(caps) => {
                let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
                let date = caps.get(1).map(|m| m.as_str().trim()).unwrap_or("");
                (date.to_string(), end)
            }
            None => (String::new(), 0),
        };

        let content = content_span(html, start).to_string();
        let excerpt = excerpt(&content, self.excerpt_length);

        Post {
            slug: slug.to_string(),
            title,
            date,
            content,
            excerpt,
            status: PostStatus::Extracted,
        }
    }

    fn title(&self, html: &str) -> String {
        TITLE
            .captures(html)
            .or_else(|| H1.captures(html))
            .and_then(|caps| caps.get(1))
            .map(|m| strip_suffix(m.as_str(), &self.title_suffix))
            .unwrap_or_else(|| UNTITLED.to_string())
    }
}

/// Remove the first occurrence of the site-name suffix and trim
pub(crate) fn strip_suffix(title: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return title.trim().to_string();
    }
    title.replacen(suffix, "", 1).trim().to_string()
}

/// Body between `start` and the first terminator after it
fn content_span(html: &str, start: usize) -> &str {
    let rest = &html[start..];
    let end = CONTENT_TERMINATORS
        .iter()
        .filter_map(|marker| rest.find(marker))
        .min()
        .map(|offset| start + offset)
        .unwrap_or(html.len());

    if end > start {
        &html[start..end]
    } else {
        rest
    }
}
