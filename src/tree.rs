//! Owned Document Tree
//!
//! A read-only snapshot of an HTML document: every node is either an
//! [`Element`] or a [`Node::Text`] payload. Extraction runs entirely over this
//! structure, so it never holds references into a live DOM and any subtree
//! can be deep-copied with `Clone` for sanitized output.
//!
//! Cloning, comparing and dropping an [`Element`] use an explicit heap stack
//! instead of recursion, so nesting depth is bounded by memory only.
//!
//! Trees are normally produced by [`crate::dom::parse`], but they can also be
//! assembled by hand, which is how most unit tests build their fixtures:
//!
//! ```rust
//! use page_capture::tree::{Document, Element};
//!
//! let doc = Document::new(vec![Element::new("html")
//!     .with_child(Element::new("body").with_child(Element::new("p").with_text("hi")))
//!     .into()]);
//! assert_eq!(doc.body().map(Element::text_content), Some("hi".to_string()));
//! ```

/// A single node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element attribute (name is lowercase for parsed documents).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An element with its tag name, ordered attributes and ordered children.
#[derive(Debug)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// What a [`Visitor`] wants to do with an element it has just entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Visit the element's children.
    Descend,
    /// Skip the element's whole subtree.
    Skip,
}

/// Depth-first visitor over elements and text nodes.
///
/// `enter` is called for every element (the walk root included) before its
/// children; `text` is called for every text node inside a descended element,
/// together with its nearest element ancestor. `leave` follows the last child
/// of every element that was descended into.
pub trait Visitor<'a> {
    fn enter(&mut self, _element: &'a Element) -> Visit {
        Visit::Descend
    }

    fn leave(&mut self, _element: &'a Element) {}

    fn text(&mut self, _text: &'a str, _parent: &'a Element) {}
}

impl Element {
    /// Create an element with no attributes and no children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: append an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Builder: append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Builder: append a text node.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    /// Value of the first attribute called `name`.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// True when the whitespace-separated `class` list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }

    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.name.eq_ignore_ascii_case(tag)
    }

    /// Concatenated text of all descendant text nodes, like DOM `textContent`.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// All descendant elements in document order (pre-order, excluding `self`).
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.children)
    }

    /// Descendant elements whose tag is one of `tags`, in document order.
    pub fn select_tags<'a>(&'a self, tags: &'a [&'a str]) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |el| tags.iter().any(|t| el.is(t)))
    }

    /// Walk this element and its subtree depth-first with `visitor`.
    pub fn walk<'a, V: Visitor<'a>>(&'a self, visitor: &mut V) {
        if visitor.enter(self) == Visit::Skip {
            return;
        }
        let mut stack: Vec<(&'a Element, std::slice::Iter<'a, Node>)> =
            vec![(self, self.children.iter())];
        while let Some((parent, iter)) = stack.last_mut() {
            let parent: &'a Element = *parent;
            let next = iter.next();
            match next {
                Some(Node::Text(text)) => visitor.text(text, parent),
                Some(Node::Element(child)) => {
                    if visitor.enter(child) == Visit::Descend {
                        stack.push((child, child.children.iter()));
                    }
                }
                None => {
                    stack.pop();
                    visitor.leave(parent);
                }
            }
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    let mut stack = vec![nodes.iter()];
    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(Node::Text(text)) => out.push_str(text),
            Some(Node::Element(el)) => stack.push(el.children.iter()),
            None => {
                stack.pop();
            }
        }
    }
}

impl Element {
    fn shallow_copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            attrs: self.attrs.clone(),
            children: Vec::with_capacity(self.children.len()),
        }
    }
}

impl Clone for Element {
    fn clone(&self) -> Self {
        let mut ancestors: Vec<(std::slice::Iter<'_, Node>, Element)> = Vec::new();
        let mut current = (self.children.iter(), self.shallow_copy());
        loop {
            match current.0.next() {
                Some(Node::Text(text)) => current.1.children.push(Node::Text(text.clone())),
                Some(Node::Element(child)) => {
                    let parent =
                        std::mem::replace(&mut current, (child.children.iter(), child.shallow_copy()));
                    ancestors.push(parent);
                }
                None => {
                    let Some(mut parent) = ancestors.pop() else {
                        return current.1;
                    };
                    std::mem::swap(&mut current, &mut parent);
                    current.1.children.push(Node::Element(parent.1));
                }
            }
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.name != b.name || a.attrs != b.attrs || a.children.len() != b.children.len() {
                return false;
            }
            for pair in a.children.iter().zip(&b.children) {
                match pair {
                    (Node::Text(x), Node::Text(y)) if x == y => {}
                    (Node::Element(x), Node::Element(y)) => pending.push((x, y)),
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Element {}

impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut el) = node {
                pending.append(&mut el.children);
            }
        }
    }
}

/// Pre-order iterator over descendant elements.
pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Descendants<'a> {
    fn new(nodes: &'a [Node]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(Node::Element(el)) => {
                    self.stack.push(el.children.iter());
                    return Some(el);
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// The synthetic document container holding the top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// All elements in document order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.children)
    }

    /// First element in document order satisfying `predicate`.
    pub fn find(&self, predicate: impl FnMut(&&Element) -> bool) -> Option<&Element> {
        self.descendants().find(predicate)
    }

    /// The `<body>` element, if the tree has one.
    #[must_use]
    pub fn body(&self) -> Option<&Element> {
        self.find(|el| el.is("body"))
    }

    /// Trimmed text of the first `<title>` element.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.find(|el| el.is("title"))
            .map(|el| el.text_content().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// `href` of the first `<base>` element that carries one.
    #[must_use]
    pub fn base_href(&self) -> Option<&str> {
        self.descendants()
            .filter(|el| el.is("base"))
            .find_map(|el| el.attr("href"))
    }
}
