//! # page-capture
//!
//! Single-pass extraction of a web page into a clean, structured,
//! re-renderable capture.
//!
//! Given one document and the location it was loaded from, the extractor
//! picks the main content region, linearizes its visible text, pulls out
//! headings, paragraphs, lists, tables and images, collects deduplicated video
//! references, and builds a sanitized HTML fragment for later redisplay.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_capture::{extract_html, PageLocation};
//!
//! let html = r#"<html><body><nav>Menu</nav>
//! <article><h1>My Article</h1><p onclick="track()">Main content of the article goes here.</p></article>
//! </body></html>"#;
//!
//! let location = PageLocation::new("https://example.com/post", "My Article");
//! let result = extract_html(html, &location)?;
//!
//! assert_eq!(result.text, "My Article Main content of the article goes here.");
//! assert_eq!(result.structured_content.headings[0].text, "My Article");
//! assert_eq!(result.favicon, "https://example.com/favicon.ico");
//! assert!(!result.clean_html.contains("onclick"));
//! # Ok::<(), page_capture::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Root selection**: `article`, `main`, `[role="main"]`, `.content`,
//!    `.post-content`, `.article-content`, `#content`, then `body`
//! 2. **Text linearization**: visible text only, whitespace-normalized
//! 3. **Structured extraction**: typed records per block category
//! 4. **Media resolution**: video ids from embeds, then links
//! 5. **Sanitized HTML**: block elements without scripts or event handlers
//!
//! The pipeline is synchronous and deterministic; it never mutates the input
//! tree and keeps no state between calls.

mod error;
mod location;
mod options;
mod patterns;
mod result;

/// Owned document tree and depth-first visitor.
pub mod tree;

/// HTML parsing into the owned tree.
pub mod dom;

/// HTML serialization of the owned tree.
pub mod serialize;

/// Content root selectors.
pub mod selector;

/// Pluggable visibility checks.
pub mod visibility;

/// Extraction stages and pipeline.
pub mod extractor;

/// URL resolution helpers.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Capture envelope for uploads.
pub mod payload;

/// Display tier selection for viewers.
pub mod view;

// Public API - re-exports
pub use error::{Error, Result};
pub use location::PageLocation;
pub use options::Options;
pub use payload::{CaptureMetadata, CapturePayload};
pub use result::{
    ExtractionResult, Heading, ImagePosition, ListBlock, ListKind, StructuredContent, TableBlock,
    VideoRef,
};
pub use selector::ContentSelector;
pub use tree::{Document, Element, Node};
pub use view::DisplayTier;
pub use visibility::{AlwaysVisible, InheritedVisibility, InlineStyleVisibility, Visibility};

/// Extracts a page from an already-built document tree using default options.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when the tree has no usable content root.
pub fn extract(document: &Document, location: &PageLocation) -> Result<ExtractionResult> {
    extract_with_options(document, location, &Options::default())
}

/// Extracts a page with custom options and the inline-style visibility check.
pub fn extract_with_options(
    document: &Document,
    location: &PageLocation,
    options: &Options,
) -> Result<ExtractionResult> {
    extract_with(document, location, options, &InlineStyleVisibility)
}

/// Extracts a page with custom options and a host-supplied visibility check.
///
/// # Example
///
/// ```rust
/// use page_capture::{dom, extract_with, Element, Options, PageLocation};
///
/// let doc = dom::parse(r#"<article><p class="sr-only">skip</p><p>keep</p></article>"#);
/// let hidden_by_class = |el: &Element| el.has_class("sr-only");
/// let result = extract_with(&doc, &PageLocation::default(), &Options::default(), &hidden_by_class)?;
/// assert_eq!(result.text, "keep");
/// # Ok::<(), page_capture::Error>(())
/// ```
pub fn extract_with<V: Visibility + ?Sized>(
    document: &Document,
    location: &PageLocation,
    options: &Options,
    visibility: &V,
) -> Result<ExtractionResult> {
    extractor::extract_page(document, location, options, visibility)
}

/// Parses an HTML string and extracts it using default options.
pub fn extract_html(html: &str, location: &PageLocation) -> Result<ExtractionResult> {
    extract(&dom::parse(html), location)
}

/// Parses raw HTML bytes (charset detected from BOM or `<meta>`) and
/// extracts them using default options.
///
/// ```rust
/// use page_capture::{extract_bytes, PageLocation};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><article>Caf\xE9</article></body></html>";
/// let result = extract_bytes(html, &PageLocation::default())?;
/// assert_eq!(result.text, "Café");
/// # Ok::<(), page_capture::Error>(())
/// ```
pub fn extract_bytes(html: &[u8], location: &PageLocation) -> Result<ExtractionResult> {
    extract_html(&encoding::decode_html(html), location)
}
