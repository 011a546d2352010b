//! Pluggable visibility checks for the text linearizer.
//!
//! A full cascade is out of reach without a style engine, so the host decides
//! what "hidden" means. [`InlineStyleVisibility`] is the default and only
//! looks at what the markup itself says.
//!
//! Text is judged by its nearest element ancestor alone, the way a browser
//! reports the computed style of `node.parentElement`. Wrap a check in
//! [`InheritedVisibility`] to also hide everything below a hidden element.

use crate::patterns::{STYLE_DISPLAY_NONE, STYLE_VISIBILITY_HIDDEN};
use crate::tree::Element;

/// Decides whether an element is effectively hidden.
pub trait Visibility {
    /// True when the element renders as `display: none` or `visibility: hidden`.
    fn is_hidden(&self, element: &Element) -> bool;

    /// True when text directly inside the last element of `path` is hidden.
    ///
    /// `path` runs from the walk root down to the text's nearest element
    /// ancestor. Only that last element is checked by default.
    fn hides_text(&self, path: &[&Element]) -> bool {
        path.last().is_some_and(|parent| self.is_hidden(parent))
    }
}

impl<F> Visibility for F
where
    F: Fn(&Element) -> bool,
{
    fn is_hidden(&self, element: &Element) -> bool {
        self(element)
    }
}

/// Hidden when the element has the `hidden` attribute or its inline `style`
/// declares `display: none` / `visibility: hidden`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyleVisibility;

impl Visibility for InlineStyleVisibility {
    fn is_hidden(&self, element: &Element) -> bool {
        if element.has_attr("hidden") {
            return true;
        }
        element.attr("style").is_some_and(|style| {
            STYLE_DISPLAY_NONE.is_match(style) || STYLE_VISIBILITY_HIDDEN.is_match(style)
        })
    }
}

/// Treats every element as visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVisible;

impl Visibility for AlwaysVisible {
    fn is_hidden(&self, _element: &Element) -> bool {
        false
    }
}

/// Hides text when any element on its ancestor path is hidden.
///
/// Useful when the inner check only sees markup, so a child of a
/// `display: none` container would otherwise count as visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct InheritedVisibility<V>(pub V);

impl<V: Visibility> Visibility for InheritedVisibility<V> {
    fn is_hidden(&self, element: &Element) -> bool {
        self.0.is_hidden(element)
    }

    fn hides_text(&self, path: &[&Element]) -> bool {
        path.iter().any(|el| self.0.is_hidden(el))
    }
}
