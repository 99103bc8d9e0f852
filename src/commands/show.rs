//! Show a single post

use anyhow::{bail, Result};
use std::io::Write;

use crate::content::Post;
use crate::Blog;

/// Print one post with links to its neighbours
pub fn run(blog: &Blog, slug: &str, json: bool) -> Result<()> {
    let Some(post) = blog.post_by_slug(slug) else {
        bail!("post not found: {}", slug);
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, &post)?;
        writeln!(out)?;
        return Ok(());
    }

    let posts = blog.all_posts();
    write_post(&mut out, &post, &posts)
}

pub fn write_post<W: Write>(out: &mut W, post: &Post, posts: &[Post]) -> Result<()> {
    writeln!(out, "{}", post.title)?;
    if !post.date.is_empty() {
        writeln!(out, "{}", post.date)?;
    }
    writeln!(out)?;
    if !post.excerpt.is_empty() {
        writeln!(out, "{}", post.excerpt)?;
        writeln!(out)?;
    }
    writeln!(out, "{}", post.content.trim())?;

    if let Some(prev) = post.prev(posts) {
        writeln!(out, "\nPrevious: {} ({})", prev.title, prev.slug)?;
    }
    if let Some(next) = post.next(posts) {
        writeln!(out, "Next: {} ({})", next.title, next.slug)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_post_with_neighbours() {
        let posts: Vec<Post> = ["001-a", "002-b", "003-c"]
            .iter()
            .map(|s| Post::placeholder(s))
            .collect();

        let mut out = Vec::new();
        write_post(&mut out, &posts[1], &posts).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("b\nUnknown date\n"));
        assert!(text.contains("Previous: a (001-a)"));
        assert!(text.contains("Next: c (003-c)"));
    }

    #[test]
    fn test_write_post_without_date() {
        let mut post = Post::placeholder("001-a");
        post.date.clear();
        post.excerpt.clear();

        let mut out = Vec::new();
        write_post(&mut out, &post, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "a\n\n<p>Content not available.</p>\n");
    }
}
