//! Tag catalogs used by the extraction stages.

/// Heading tags, indexed by level - 1.
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// List containers: ul, ol
pub static LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// Elements whose text never counts as visible prose.
pub static NON_PROSE_TAGS: [&str; 4] = ["script", "style", "noscript", "iframe"];

/// Block elements carried into the sanitized HTML fragment.
pub static CLEAN_HTML_TAGS: [&str; 12] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "ul", "ol", "table", "blockquote", "pre",
];

/// Elements removed from sanitized clones.
pub static EXECUTABLE_TAGS: [&str; 2] = ["script", "style"];

/// Container used to serialize the sanitized fragment.
pub const CLEAN_HTML_CONTAINER: &str = "article";

/// Heading level of an `h1`–`h6` tag name.
#[must_use]
pub fn heading_level(tag: &str) -> Option<u8> {
    HEADING_TAGS
        .iter()
        .position(|h| h.eq_ignore_ascii_case(tag))
        .and_then(|i| u8::try_from(i + 1).ok())
}

#[must_use]
pub fn is_non_prose_tag(tag: &str) -> bool {
    NON_PROSE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

#[must_use]
pub fn is_executable_tag(tag: &str) -> bool {
    EXECUTABLE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}
