//! Page extraction stages.
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs shared by the stages
//! - `root`: Content root selection
//! - `text`: Visible text linearization
//! - `structured`: Headings, paragraphs, lists, tables and image positions
//! - `media`: Deduplicated video references
//! - `sanitize`: Sanitized HTML fragment builder
//! - `favicon`: Page icon discovery
//! - `pipeline`: Stage orchestration and result assembly
//!
//! # Usage
//!
//! ```rust
//! use page_capture::dom;
//! use page_capture::extractor::{root, structured, text};
//! use page_capture::selector::default_content_selectors;
//! use page_capture::visibility::InlineStyleVisibility;
//!
//! let doc = dom::parse("<article><h1>Title</h1><p>Body text</p></article>");
//! let content_root = root::select_root(&doc, &default_content_selectors())?;
//!
//! assert_eq!(text::linearize(content_root, &InlineStyleVisibility), "Title Body text");
//! assert_eq!(structured::extract_headings(content_root)[0].text, "Title");
//! # Ok::<(), page_capture::Error>(())
//! ```

pub mod favicon;
pub mod media;
pub mod pipeline;
pub mod root;
pub mod sanitize;
pub mod structured;
pub mod tags;
pub mod text;

pub use pipeline::extract_page;
