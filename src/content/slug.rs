//! Slug conventions for post directories

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref POST_SLUG: Regex = Regex::new(r"^[0-9]+-.+").unwrap();
    static ref NUMERIC_PREFIX: Regex = Regex::new(r"^[0-9]+-").unwrap();
}

/// Whether a directory name follows the `<digits>-<text>` post convention
pub fn is_post_slug(name: &str) -> bool {
    POST_SLUG.is_match(name)
}

/// Whether a slug is safe to join onto the posts root
pub fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.contains('/')
        && !slug.contains('\\')
        && slug != "."
        && slug != ".."
}

/// Human-readable title derived from a slug: `003-hello-world` -> `hello world`
pub fn title_from_slug(slug: &str) -> String {
    NUMERIC_PREFIX.replace(slug, "").replace('-', " ")
}
