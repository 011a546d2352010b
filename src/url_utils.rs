//! URL Utility Functions
//!
//! Resolution of relative references the way a browser's `img.src`,
//! `a.href` and `link.href` properties would report them.

use url::{Origin, Url};

/// Schemes that are kept byte-for-byte instead of being re-serialized.
const OPAQUE_PREFIXES: &[&str] = &["data:", "javascript:", "mailto:", "tel:"];

/// Parse a string into an absolute URL.
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    Url::parse(url_str.trim()).ok()
}

/// Compute the document base URL: `<base href>` resolved against the page
/// URL when present, otherwise the page URL itself.
#[must_use]
pub fn document_base(page_url: &str, base_href: Option<&str>) -> Option<Url> {
    let page = parse_url(page_url);
    match (page, base_href.map(str::trim).filter(|h| !h.is_empty())) {
        (Some(page), Some(href)) => page.join(href).ok().or(Some(page)),
        (None, Some(href)) => parse_url(href),
        (page, None) => page,
    }
}

/// Resolve a possibly relative reference against `base`.
///
/// Empty input yields an empty string. Without a base, or when resolution
/// fails, the trimmed input is returned unchanged.
#[must_use]
pub fn resolve(reference: &str, base: Option<&Url>) -> String {
    let reference = reference.trim();
    if reference.is_empty() {
        return String::new();
    }

    if has_opaque_scheme(reference) {
        return reference.to_string();
    }

    match base {
        Some(base) => base
            .join(reference)
            .map_or_else(|_| reference.to_string(), |u| u.to_string()),
        None => reference.to_string(),
    }
}

/// True for inline `data:` URIs (scheme match is case-insensitive).
#[must_use]
pub fn is_data_uri(url_str: &str) -> bool {
    url_str
        .trim_start()
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

/// Hostname of a URL, if it has one.
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    parse_url(url_str)
        .and_then(|u| u.host_str().map(std::string::ToString::to_string))
        .filter(|h| !h.is_empty())
}

/// Serialized origin (`scheme://host[:port]`) of a URL, `None` when opaque.
#[must_use]
pub fn origin(url: &Url) -> Option<String> {
    match url.origin() {
        origin @ Origin::Tuple(..) => Some(origin.ascii_serialization()),
        Origin::Opaque(_) => None,
    }
}

/// `{origin}/favicon.ico`, or the root-relative path when the page has no origin.
#[must_use]
pub fn default_favicon(page_url: &str) -> String {
    parse_url(page_url)
        .as_ref()
        .and_then(origin)
        .map_or_else(|| "/favicon.ico".to_string(), |o| format!("{o}/favicon.ico"))
}

/// Resolves attribute values against a fixed document base.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    base: Option<Url>,
}

impl Resolver {
    #[must_use]
    pub fn new(base: Option<Url>) -> Self {
        Self { base }
    }

    /// A resolver that only trims values.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn resolve(&self, reference: &str) -> String {
        resolve(reference, self.base.as_ref())
    }
}

fn has_opaque_scheme(reference: &str) -> bool {
    OPAQUE_PREFIXES.iter().any(|prefix| {
        reference
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
