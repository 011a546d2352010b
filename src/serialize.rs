//! HTML fragment serialization for the owned tree.
//!
//! Follows the HTML5 fragment serialization rules closely enough for
//! redisplay: void elements get no end tag, raw-text elements are written
//! verbatim, and everything else is escaped.

use std::fmt::Write as _;

use crate::tree::{Element, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

/// Serialize the children of `element` (DOM `innerHTML`).
#[must_use]
pub fn inner_html(element: &Element) -> String {
    let mut out = String::new();
    let mut open = vec![(element, element.children.iter())];
    while let Some((parent, children)) = open.last_mut() {
        let parent: &Element = *parent;
        match children.next() {
            Some(Node::Text(text)) if is_raw_text(parent) => out.push_str(text),
            Some(Node::Text(text)) => out.push_str(&escape_text(text)),
            Some(Node::Element(el)) => {
                write_start_tag(el, &mut out);
                if !VOID_ELEMENTS.contains(&el.name.as_str()) {
                    open.push((el, el.children.iter()));
                }
            }
            None => {
                open.pop();
                // The outermost frame is `element` itself, which gets no tags.
                if !open.is_empty() {
                    let _ = write!(out, "</{}>", parent.name);
                }
            }
        }
    }
    out
}

fn write_start_tag(element: &Element, out: &mut String) {
    let _ = write!(out, "<{}", element.name);
    for attr in &element.attrs {
        let _ = write!(out, " {}=\"{}\"", attr.name, escape_attr(&attr.value));
    }
    out.push('>');
}

fn is_raw_text(element: &Element) -> bool {
    RAW_TEXT_ELEMENTS.contains(&element.name.as_str())
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
