//! Compiled regex patterns used by the extraction stages.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Runs of whitespace (Unicode-aware, so U+00A0 collapses too).
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Video id inside an embed source (`youtube.com/embed/ID` or `youtu.be/ID`).
pub static YOUTUBE_EMBED_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/embed/|youtu\.be/)([A-Za-z0-9_-]+)")
        .expect("YOUTUBE_EMBED_ID regex")
});

/// Video id inside a link target (`youtube.com/watch?v=ID` or `youtu.be/ID`).
pub static YOUTUBE_WATCH_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([A-Za-z0-9_-]+)")
        .expect("YOUTUBE_WATCH_ID regex")
});

/// `display: none` inside an inline style declaration.
pub static STYLE_DISPLAY_NONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*display\s*:\s*none\s*(?:!important\s*)?(?:;|$)")
        .expect("STYLE_DISPLAY_NONE regex")
});

/// `visibility: hidden` inside an inline style declaration.
pub static STYLE_VISIBILITY_HIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*visibility\s*:\s*hidden\s*(?:!important\s*)?(?:;|$)")
        .expect("STYLE_VISIBILITY_HIDDEN regex")
});

/// `<meta charset="...">`
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("CHARSET_META regex")
});
