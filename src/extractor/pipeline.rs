//! Extraction pipeline.
//!
//! Runs the stages in order against one document: root selection, text
//! linearization, structured extraction, video resolution and the sanitized
//! HTML builder. Every stage after the first only reads the tree and the
//! chosen root, and writes its own part of the result.

use tracing::debug;

use crate::error::Result;
use crate::location::PageLocation;
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::tree::Document;
use crate::url_utils::{document_base, Resolver};
use crate::visibility::Visibility;

use super::favicon::resolve_favicon;
use super::media::extract_videos;
use super::root::select_root;
use super::sanitize::build_clean_html;
use super::structured::extract_structured;
use super::text::linearize;

/// Run the full pipeline.
///
/// Fails only when the document has no usable root; in that case nothing is
/// returned, not even the location fields.
pub fn extract_page<V: Visibility + ?Sized>(
    document: &Document,
    location: &PageLocation,
    options: &Options,
    visibility: &V,
) -> Result<ExtractionResult> {
    let root = select_root(document, &options.content_selectors)?;
    debug!(root = %root.name, url = %location.url, "extracting page");

    let base = document_base(&location.url, document.base_href());
    let base_resolver = Resolver::new(base);
    let resolver = if options.resolve_urls {
        base_resolver.clone()
    } else {
        Resolver::disabled()
    };

    let favicon = resolve_favicon(document, &location.url, &base_resolver);

    let text = linearize(root, visibility);
    debug!(chars = text.chars().count(), "linearized visible text");

    let (structured_content, image_urls) =
        extract_structured(root, options.min_paragraph_chars, &resolver);
    debug!(
        headings = structured_content.headings.len(),
        paragraphs = structured_content.paragraphs.len(),
        lists = structured_content.lists.len(),
        tables = structured_content.tables.len(),
        images = image_urls.len(),
        "extracted structured content"
    );

    let youtube_videos = extract_videos(root, &resolver, &options.default_video_title);
    debug!(videos = youtube_videos.len(), "resolved video references");

    let clean_html = build_clean_html(root);
    debug!(bytes = clean_html.len(), "built sanitized html");

    Ok(ExtractionResult {
        url: location.url.clone(),
        title: location.title.clone(),
        domain: location.hostname.clone(),
        favicon,
        text,
        image_urls,
        youtube_videos,
        structured_content,
        clean_html,
    })
}
