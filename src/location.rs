//! Page location supplied by the hosting environment.

use serde::{Deserialize, Serialize};

use crate::url_utils;

/// URL, title and hostname of the captured page.
///
/// These come from the host (browser tab, crawler record, CLI flags); the
/// extractor copies them into the result and uses `url` as the base for
/// resolving relative references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLocation {
    pub url: String,
    pub title: String,
    pub hostname: String,
}

impl PageLocation {
    /// Build a location, deriving `hostname` from `url`.
    ///
    /// ```rust
    /// use page_capture::PageLocation;
    ///
    /// let location = PageLocation::new("https://blog.example.com/post/1", "Post");
    /// assert_eq!(location.hostname, "blog.example.com");
    /// ```
    #[must_use]
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        let url = url.into();
        let hostname = url_utils::extract_hostname(&url).unwrap_or_default();
        Self {
            url,
            title: title.into(),
            hostname,
        }
    }
}
