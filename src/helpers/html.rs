//! HTML helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// First `<p>` element; the optional attribute group keeps `<pre>` out
    static ref PARAGRAPH: Regex = Regex::new(r"(?s)<p(?:\s[^>]*)?>(.*?)</p>").unwrap();
}

/// Literal suffix appended to every excerpt
pub const EXCERPT_OMISSION: &str = "...";

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Inner markup of the first paragraph in `html`, if any
pub fn first_paragraph(html: &str) -> Option<&str> {
    PARAGRAPH
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Build an excerpt from the first paragraph of `html`
///
/// Tags are stripped, the text is cut to `length` characters and
/// [`EXCERPT_OMISSION`] is appended whether or not anything was cut.
/// Returns an empty string when there is no paragraph.
///
/// # Examples
/// ```
/// use wsblog::helpers::excerpt;
/// assert_eq!(excerpt("<p>Hi <b>there</b>.</p>", 160), "Hi there....");
/// assert_eq!(excerpt("<div>none</div>", 160), "");
/// ```
pub fn excerpt(html: &str, length: usize) -> String {
    match first_paragraph(html) {
        Some(inner) => {
            let text: String = strip_html(inner).chars().take(length).collect();
            format!("{}{}", text, EXCERPT_OMISSION)
        }
        None => String::new(),
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_first_paragraph_skips_pre() {
        let html = "<pre>code</pre><p class=\"lead\">Text</p>";
        assert_eq!(first_paragraph(html), Some("Text"));
    }

    #[test]
    fn test_excerpt_always_appends_omission() {
        assert_eq!(excerpt("<p>Short.</p>", 160), "Short....");
    }

    #[test]
    fn test_excerpt_truncates_by_chars() {
        let long = format!("<p>{}</p>", "é".repeat(400));
        let result = excerpt(&long, 160);
        assert_eq!(result.chars().count(), 163);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_excerpt_spans_lines() {
        assert_eq!(excerpt("<p>one\ntwo</p>", 160), "one\ntwo...");
    }

    #[test]
    fn test_excerpt_without_paragraph() {
        assert_eq!(excerpt("<h2>Title</h2>", 160), "");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }
}
