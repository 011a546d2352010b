//! Sanitized HTML fragment builder.
//!
//! This is a denylist sanitizer: it removes `script`/`style` elements and
//! `on*` event-handler attributes from deep copies of the content blocks and
//! leaves every other attribute alone. Consumers that render the fragment
//! into an untrusted context still need their own allowlist pass.

use crate::serialize;
use crate::tree::{Element, Node};

use super::tags::{is_executable_tag, CLEAN_HTML_CONTAINER, CLEAN_HTML_TAGS};

/// Build the sanitized fragment for the block elements under `root`.
///
/// Matches are taken in document order, including blocks nested inside other
/// matches, which therefore appear both inside their ancestor's copy and on
/// their own.
#[must_use]
pub fn build_clean_html(root: &Element) -> String {
    let mut container = Element::new(CLEAN_HTML_CONTAINER);
    for block in root.select_tags(&CLEAN_HTML_TAGS) {
        let mut copy = block.clone();
        strip_executable(&mut copy);
        container.children.push(Node::Element(copy));
    }
    serialize::inner_html(&container)
}

/// Remove script/style descendants and event-handler attributes in place.
pub fn strip_executable(element: &mut Element) {
    let mut pending = vec![element];
    while let Some(el) = pending.pop() {
        el.attrs.retain(|attr| !is_event_handler(&attr.name));
        el.children.retain(|child| match child {
            Node::Element(child) => !is_executable_tag(&child.name),
            Node::Text(_) => true,
        });
        pending.extend(el.children.iter_mut().filter_map(|child| match child {
            Node::Element(child) => Some(child),
            Node::Text(_) => None,
        }));
    }
}

fn is_event_handler(name: &str) -> bool {
    name.get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn clean(html: &str) -> String {
        let doc = dom::parse(html);
        build_clean_html(doc.body().unwrap())
    }

    #[test]
    fn test_event_handlers_removed_everywhere() {
        let out = clean(
            r#"<p onclick="evil()" class="lead">Hi <a href="/x" onmouseover="x()" ONLOAD="y()">link</a></p>"#,
        );
        assert_eq!(out, r#"<p class="lead">Hi <a href="/x">link</a></p>"#);
    }

    #[test]
    fn test_nested_script_and_style_removed() {
        let out = clean("<blockquote>quote<script>alert(1)</script><style>p{}</style></blockquote>");
        assert_eq!(out, "<blockquote>quote</blockquote>");
    }

    #[test]
    fn test_only_block_elements_kept() {
        let out = clean("<div><h2>Title</h2><span>loose</span><pre>code</pre><img src=a.png></div>");
        assert_eq!(out, "<h2>Title</h2><pre>code</pre>");
    }

    #[test]
    fn test_nested_blocks_repeat() {
        let out = clean("<blockquote><p>inner paragraph</p></blockquote>");
        assert_eq!(
            out,
            "<blockquote><p>inner paragraph</p></blockquote><p>inner paragraph</p>"
        );
    }

    #[test]
    fn test_other_attributes_preserved() {
        let out = clean(r#"<p style="color:red" data-x="1" id="p1">styled</p>"#);
        assert_eq!(out, r#"<p style="color:red" data-x="1" id="p1">styled</p>"#);
    }

    #[test]
    fn test_source_tree_untouched() {
        let doc = dom::parse(r#"<p onclick="x()">a<script>b</script></p>"#);
        let before = doc.clone();
        let _ = build_clean_html(doc.body().unwrap());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_deeply_nested_block() {
        let mut inner = Element::new("span").with_attr("onclick", "x()").with_text("deep");
        for _ in 0..50_000 {
            inner = Element::new("span").with_child(inner);
        }
        let root = Element::new("body").with_child(
            Element::new("p")
                .with_child(inner)
                .with_child(Element::new("script").with_text("x()")),
        );
        let out = build_clean_html(&root);
        assert!(out.starts_with("<p><span><span>"));
        assert!(out.ends_with("deep</span></span></p>"));
        assert!(!out.contains("onclick"));
        assert!(!out.contains("x()"));
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(clean(""), "");
    }
}
