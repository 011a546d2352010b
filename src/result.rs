//! Result types for extraction output.
//!
//! Every record serializes with the snake_case field names the capture
//! envelope uses downstream.

use serde::{Deserialize, Serialize};

/// A heading (`h1`–`h6`) in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Numeric suffix of the tag, `1..=6`.
    pub level: u8,
    pub text: String,
    /// 0-based index among headings.
    pub position: usize,
}

/// Whether a list came from `<ol>` or `<ul>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// A non-empty `<ul>`/`<ol>` with the text of every `li` inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    pub kind: ListKind,
    pub items: Vec<String>,
}

/// A table with at least one row of data cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    /// Every `th` in the table, in document order.
    pub headers: Vec<String>,
    /// `td` texts per `tr`; rows without data cells are omitted.
    pub rows: Vec<Vec<String>>,
}

/// An accepted image and its index among accepted images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePosition {
    pub src: String,
    /// Alt text, empty when absent.
    pub alt: String,
    pub position: usize,
}

/// Typed decomposition of the content root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredContent {
    pub headings: Vec<Heading>,
    pub paragraphs: Vec<String>,
    pub lists: Vec<ListBlock>,
    pub tables: Vec<TableBlock>,
    #[serde(rename = "images_positions")]
    pub image_positions: Vec<ImagePosition>,
}

impl StructuredContent {
    /// True when every category is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
            && self.paragraphs.is_empty()
            && self.lists.is_empty()
            && self.tables.is_empty()
            && self.image_positions.is_empty()
    }
}

/// A referenced video, unique by `video_id` within a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    /// Canonical watch URL.
    pub url: String,
    /// Canonical embed URL.
    pub embed_url: String,
    pub video_id: String,
    pub title: String,
}

impl VideoRef {
    #[must_use]
    pub fn youtube(video_id: &str, title: String) -> Self {
        Self {
            url: format!("https://www.youtube.com/watch?v={video_id}"),
            embed_url: format!("https://www.youtube.com/embed/{video_id}"),
            video_id: video_id.to_string(),
            title,
        }
    }
}

/// Everything captured from one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub url: String,
    pub title: String,
    pub domain: String,
    /// Absolute favicon URL (`{origin}/favicon.ico` when the page names none).
    pub favicon: String,
    /// Visible prose of the content root, whitespace-normalized.
    pub text: String,
    /// Accepted image sources, one-to-one with `structured_content.image_positions`.
    pub image_urls: Vec<String>,
    pub youtube_videos: Vec<VideoRef>,
    pub structured_content: StructuredContent,
    /// Sanitized HTML fragment of the content root's block elements.
    pub clean_html: String,
}
