//! Errors raised while reading a single post

use std::path::PathBuf;
use thiserror::Error;

/// Post reading errors
///
/// None of these escape the listing API; the lister turns them into
/// placeholders and the lookup into `None`.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
