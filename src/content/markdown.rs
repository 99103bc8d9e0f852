//! Markdown posts: front-matter plus a body rendered with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::extract::strip_suffix;
use super::frontmatter::FrontMatter;
use super::post::{Post, PostStatus, UNTITLED};
use crate::config::SiteConfig;
use crate::helpers::{excerpt, html_escape};

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    /// Create with a specific highlighting theme
    pub fn with_theme(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        // Front-matter is stripped by FrontMatter::parse, so no metadata blocks here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut in_code_block = false;
        let mut code_block_lang: Option<String> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_block_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let highlighted =
                        self.highlight_code(&code_block_content, code_block_lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                    in_code_block = false;
                    code_block_lang = None;
                }
                Event::Text(text) if in_code_block => {
                    code_block_content.push_str(&text);
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let highlighted = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
            .and_then(|theme| {
                highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()
            });

        match highlighted {
            Some(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                lang, highlighted
            ),
            None => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                html_escape(code)
            ),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds posts from `index.md` sources
pub struct MarkdownExtractor {
    renderer: MarkdownRenderer,
    title_suffix: String,
    date_format: String,
    excerpt_length: usize,
}

impl MarkdownExtractor {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            renderer: MarkdownRenderer::new(),
            title_suffix: config.title_suffix.clone(),
            date_format: config.date_format.clone(),
            excerpt_length: config.excerpt_length,
        }
    }

    /// Extract a post from markdown source
    pub fn extract(&self, source: &str, slug: &str) -> Post {
        let (fm, body) = FrontMatter::parse(source);

        let title = fm
            .title
            .as_deref()
            .map(|t| strip_suffix(t, &self.title_suffix))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());
        let date = fm.display_date(&self.date_format);
        let content = self.renderer.render(body);
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_code_block() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains("highlight rust"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_extract_markdown_post() {
        let source = r#"---
title: Hello — Wilbur Suero
date: 2020-01-01
---

Hi *there*.

Second paragraph.
"#;
        let extractor = MarkdownExtractor::new(&SiteConfig::default());
        let post = extractor.extract(source, "002-hello");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.date, "2020-01-01");
        assert_eq!(post.excerpt, "Hi there....");
        assert!(post.content.contains("<em>there</em>"));
        assert_eq!(post.status, PostStatus::Extracted);
    }

    #[test]
    fn test_extract_without_frontmatter() {
        let extractor = MarkdownExtractor::new(&SiteConfig::default());
        let post = extractor.extract("```\ncode only\n```\n", "001-a");
        assert_eq!(post.title, "Untitled");
        assert_eq!(post.date, "");
        assert_eq!(post.excerpt, "");
    }
}
