//! Capture envelope for the upload collaborator.
//!
//! Packages an [`ExtractionResult`] with capture timestamps in the shape the
//! backend's `/save` endpoint reads: four multipart fields, one of which is a
//! JSON metadata document. Transport itself is the caller's business.

use std::fmt::Display;

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::result::{ExtractionResult, StructuredContent, VideoRef};

/// The `metadata` document of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureMetadata {
    pub url: String,
    pub title: String,
    pub domain: String,
    pub favicon: String,
    /// RFC 3339 in UTC with millisecond precision.
    pub timestamp: String,
    pub timestamp_readable: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<StructuredContent>,
    #[serde(default)]
    pub youtube_videos: Vec<VideoRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_html: Option<String>,
}

/// Everything sent for one captured page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturePayload {
    pub text: String,
    pub metadata: CaptureMetadata,
    pub enable_chunking: bool,
    pub image_urls: Vec<String>,
}

impl CapturePayload {
    /// Build the envelope for `result` captured at `captured_at`.
    ///
    /// The readable date and time use the offset of `captured_at`. Empty
    /// structured content and empty clean HTML are left out of the metadata
    /// so the viewer's fallback order still works.
    pub fn new<Tz>(result: &ExtractionResult, captured_at: &DateTime<Tz>) -> Result<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if result.text.trim().is_empty() {
            return Err(Error::NoContent);
        }

        let structured_content =
            (!result.structured_content.is_empty()).then(|| result.structured_content.clone());
        let clean_html = (!result.clean_html.trim().is_empty()).then(|| result.clean_html.clone());

        let metadata = CaptureMetadata {
            url: result.url.clone(),
            title: result.title.clone(),
            domain: result.domain.clone(),
            favicon: result.favicon.clone(),
            timestamp: captured_at
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            timestamp_readable: captured_at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            date: captured_at.format("%-m/%-d/%Y").to_string(),
            time: captured_at.format("%-I:%M:%S %p").to_string(),
            structured_content,
            youtube_videos: result.youtube_videos.clone(),
            clean_html,
        };

        Ok(Self {
            text: result.text.clone(),
            metadata,
            enable_chunking: true,
            image_urls: result.image_urls.clone(),
        })
    }

    /// Build the envelope stamped with the current local time.
    pub fn now(result: &ExtractionResult) -> Result<Self> {
        Self::new(result, &Local::now())
    }

    /// The multipart form fields, in upload order.
    pub fn form_fields(&self) -> Result<Vec<(&'static str, String)>> {
        Ok(vec![
            ("text", self.text.clone()),
            ("metadata", serde_json::to_string(&self.metadata)?),
            ("enable_chunking", self.enable_chunking.to_string()),
            ("image_urls", serde_json::to_string(&self.image_urls)?),
        ])
    }

    /// The whole envelope as one JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
