//! Display tier selection for captured pages.
//!
//! A viewer shows videos when there are any, then the structured content if
//! it has anything in it, else the sanitized HTML, else a "no content"
//! notice. Each field of [`ExtractionResult`] can be empty on its own, so the
//! tier is decided from the fields rather than stored.

use serde::{Deserialize, Serialize};

use crate::result::ExtractionResult;

/// The body a viewer should render for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayTier {
    /// Render `structured_content`.
    Structured,
    /// Structured content is empty; render `clean_html`.
    CleanHtml,
    /// Only video references are available.
    VideosOnly,
    /// Nothing renderable was captured.
    NoContent,
}

impl ExtractionResult {
    #[must_use]
    pub fn has_videos(&self) -> bool {
        !self.youtube_videos.is_empty()
    }

    /// Which body tier a viewer should use for this result.
    #[must_use]
    pub fn display_tier(&self) -> DisplayTier {
        if !self.structured_content.is_empty() {
            DisplayTier::Structured
        } else if !self.clean_html.trim().is_empty() {
            DisplayTier::CleanHtml
        } else if self.has_videos() {
            DisplayTier::VideosOnly
        } else {
            DisplayTier::NoContent
        }
    }
}
