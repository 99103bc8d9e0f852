//! List posts

use anyhow::Result;
use std::io::Write;

use crate::content::Post;
use crate::Blog;

/// Print every post, as a table or as JSON
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let posts = blog.all_posts();
    let stdout = std::io::stdout();
    write_posts(&mut stdout.lock(), &posts, json)
}

pub fn write_posts<W: Write>(out: &mut W, posts: &[Post], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, posts)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Posts ({}):", posts.len())?;
    for post in posts {
        let marker = if post.is_placeholder() {
            " (unavailable)"
        } else {
            ""
        };
        writeln!(
            out,
            "  {}  {}  {}{}",
            post.slug, post.date, post.title, marker
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostStatus;

    fn sample() -> Vec<Post> {
        vec![
            Post {
                slug: "001-a".to_string(),
                title: "A".to_string(),
                date: "2020-01-01".to_string(),
                content: "<p>a</p>".to_string(),
                excerpt: "a...".to_string(),
                status: PostStatus::Extracted,
            },
            Post::placeholder("002-b"),
        ]
    }

    #[test]
    fn test_write_table() {
        let mut out = Vec::new();
        write_posts(&mut out, &sample(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Posts (2):"));
        assert!(text.contains("001-a  2020-01-01  A\n"));
        assert!(text.contains("002-b  Unknown date  b (unavailable)"));
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_posts(&mut out, &sample(), true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["slug"], "001-a");
        assert_eq!(value[1]["status"], "placeholder");
    }
}
