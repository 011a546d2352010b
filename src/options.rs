//! Configuration options for page extraction.
//!
//! The `Options` struct controls the few tunable parts of the pipeline:
//! where to look for the content root, the paragraph noise filter, and how
//! relative URLs are reported.

use serde::{Deserialize, Serialize};

use crate::selector::{default_content_selectors, ContentSelector};

/// Configuration options for page extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the standard capture behaviour.
///
/// # Example
///
/// ```rust
/// use page_capture::Options;
///
/// let options = Options {
///     min_paragraph_chars: 40,
///     ..Options::default()
/// };
/// assert!(options.resolve_urls);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Content-root candidates in priority order. The first selector that
    /// matches anything wins; `<body>` is the fallback when none match.
    ///
    /// Default: `article`, `main`, `[role="main"]`, `.content`,
    /// `.post-content`, `.article-content`, `#content`, `body`
    pub content_selectors: Vec<ContentSelector>,

    /// Paragraphs whose trimmed text has this many characters or fewer are
    /// dropped from the structured output.
    ///
    /// Default: `20`
    pub min_paragraph_chars: usize,

    /// Resolve relative `src`/`href` values against the document base URL.
    ///
    /// Default: `true`
    pub resolve_urls: bool,

    /// Title used for a video reference when the embed or link gives none.
    ///
    /// Default: `"YouTube Video"`
    pub default_video_title: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            content_selectors: default_content_selectors(),
            min_paragraph_chars: 20,
            resolve_urls: true,
            default_video_title: "YouTube Video".to_string(),
        }
    }
}
