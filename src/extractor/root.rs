//! Content root selection.
//!
//! Greedy and non-backtracking: the first selector in priority order that
//! matches anything wins, and within it the first match in document order.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::selector::ContentSelector;
use crate::tree::{Document, Element};

/// Pick the element to treat as main content.
///
/// Falls back to `<body>` when no selector matches. A tree without a body
/// (and without any match) has no usable root and yields
/// [`Error::InvalidInput`].
pub fn select_root<'a>(document: &'a Document, selectors: &[ContentSelector]) -> Result<&'a Element> {
    for selector in selectors {
        if let Some(root) = selector.query(document) {
            debug!(%selector, "selected content root");
            return Ok(root);
        }
    }

    match document.body() {
        Some(body) => {
            warn!("no content selector matched; falling back to <body>");
            Ok(body)
        }
        None => Err(Error::InvalidInput(
            "document has no content root and no <body> element".to_string(),
        )),
    }
}
