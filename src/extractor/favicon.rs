//! Favicon discovery.

use crate::tree::{Document, Element};
use crate::url_utils::{default_favicon, Resolver};

fn is_icon_link(element: &Element) -> bool {
    element.is("link")
        && element.attr("rel").is_some_and(|rel| {
            rel.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("icon"))
        })
}

/// Absolute URL of the page icon.
///
/// Uses the first `<link>` whose `rel` tokens include `icon` (which also
/// covers `rel="shortcut icon"`) and has a non-empty `href`; otherwise
/// `{origin}/favicon.ico`.
#[must_use]
pub fn resolve_favicon(document: &Document, page_url: &str, resolver: &Resolver) -> String {
    document
        .descendants()
        .filter(|el| is_icon_link(el))
        .find_map(|el| el.attr("href").map(str::trim).filter(|href| !href.is_empty()))
        .map_or_else(|| default_favicon(page_url), |href| resolver.resolve(href))
}
