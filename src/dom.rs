//! DOM Ingestion Adapter
//!
//! Parses HTML with the `dom_query` crate (html5ever underneath) and copies the
//! parsed DOM into the owned [`crate::tree`] snapshot. Comments, doctypes and
//! processing instructions are dropped; element and attribute names keep the
//! lowercase form the HTML parser gives them.

use std::vec::IntoIter;

use dom_query::{Document as DomDocument, NodeRef};

use crate::tree::{Attribute, Document, Element, Node};

/// Parse an HTML string into an owned document snapshot.
///
/// Parsing never fails: like a browser, the HTML parser repairs malformed
/// markup and always produces `<html>`, `<head>` and `<body>`.
#[must_use]
pub fn parse(html: &str) -> Document {
    snapshot(&DomDocument::from(html))
}

/// Copy an already-parsed `dom_query` document into an owned snapshot.
///
/// The copy walks the DOM with an explicit stack, so deeply nested markup
/// cannot exhaust the call stack.
#[must_use]
pub fn snapshot(doc: &DomDocument) -> Document {
    let mut top_level: Vec<Node> = Vec::new();
    let mut open: Vec<(IntoIter<NodeRef<'_>>, Element)> = Vec::new();
    let mut roots = doc.root().children().into_iter();

    loop {
        let next = match open.last_mut() {
            Some((children, _)) => children.next(),
            None => roots.next(),
        };
        match next {
            Some(node) if node.is_text() => {
                attach(&mut open, &mut top_level, Node::Text(node.text().to_string()));
            }
            Some(node) => {
                if let Some(element) = shallow_element(&node) {
                    open.push((node.children().into_iter(), element));
                }
            }
            None => match open.pop() {
                Some((_, element)) => attach(&mut open, &mut top_level, Node::Element(element)),
                None => break,
            },
        }
    }

    Document::new(top_level)
}

fn attach(open: &mut [(IntoIter<NodeRef<'_>>, Element)], top_level: &mut Vec<Node>, node: Node) {
    match open.last_mut() {
        Some((_, parent)) => parent.children.push(node),
        None => top_level.push(node),
    }
}

/// Name and attributes of an element node; `None` for comments, doctypes
/// and processing instructions.
fn shallow_element(node: &NodeRef<'_>) -> Option<Element> {
    if !node.is_element() {
        return None;
    }
    let mut element = Element::new(node.node_name()?.to_string());
    element.attrs = node
        .attrs()
        .iter()
        .map(|attr| Attribute {
            name: attr.name.local.to_string(),
            value: attr.value.to_string(),
        })
        .collect();
    Some(element)
}
