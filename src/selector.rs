//! Content Root Selectors
//!
//! A deliberately small selector language for content hooks: a tag name,
//! `.class`, `#id`, or `[attr="value"]`. Selectors are matched against the
//! owned tree in document order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tree::{Document, Element};

/// A single simple selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ContentSelector {
    /// `article`
    Tag(String),
    /// `.content`
    Class(String),
    /// `#content`
    Id(String),
    /// `[role="main"]`
    Attribute { name: String, value: String },
}

impl ContentSelector {
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Tag(tag) => element.is(tag),
            Self::Class(class) => element.has_class(class),
            Self::Id(id) => element.attr("id") == Some(id.as_str()),
            Self::Attribute { name, value } => element.attr(name) == Some(value.as_str()),
        }
    }

    /// First matching element in document order.
    #[must_use]
    pub fn query<'a>(&self, document: &'a Document) -> Option<&'a Element> {
        document.find(|el| self.matches(el))
    }
}

/// The default content-root priority list, most specific first.
#[must_use]
pub fn default_content_selectors() -> Vec<ContentSelector> {
    vec![
        ContentSelector::Tag("article".into()),
        ContentSelector::Tag("main".into()),
        ContentSelector::Attribute {
            name: "role".into(),
            value: "main".into(),
        },
        ContentSelector::Class("content".into()),
        ContentSelector::Class("post-content".into()),
        ContentSelector::Class("article-content".into()),
        ContentSelector::Id("content".into()),
        ContentSelector::Tag("body".into()),
    ]
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl FromStr for ContentSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || Error::InvalidSelector(s.to_string());

        if let Some(class) = s.strip_prefix('.') {
            return is_ident(class)
                .then(|| Self::Class(class.to_string()))
                .ok_or_else(invalid);
        }
        if let Some(id) = s.strip_prefix('#') {
            return is_ident(id)
                .then(|| Self::Id(id.to_string()))
                .ok_or_else(invalid);
        }
        if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            let (name, value) = inner.split_once('=').ok_or_else(invalid)?;
            let name = name.trim();
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            if !is_ident(name) {
                return Err(invalid());
            }
            return Ok(Self::Attribute {
                name: name.to_ascii_lowercase(),
                value: value.to_string(),
            });
        }
        if is_ident(s) {
            return Ok(Self::Tag(s.to_ascii_lowercase()));
        }
        Err(invalid())
    }
}

impl TryFrom<String> for ContentSelector {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ContentSelector> for String {
    fn from(selector: ContentSelector) -> Self {
        selector.to_string()
    }
}

impl fmt::Display for ContentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => f.write_str(tag),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Id(id) => write!(f, "#{id}"),
            Self::Attribute { name, value } => write!(f, "[{name}=\"{value}\"]"),
        }
    }
}
