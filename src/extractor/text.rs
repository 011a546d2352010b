//! Visible text linearization.

use crate::patterns::WHITESPACE_RUN;
use crate::tree::{Element, Visit, Visitor};
use crate::visibility::Visibility;

use super::tags::is_non_prose_tag;

struct VisibleText<'a, V: ?Sized> {
    visibility: &'a V,
    // Open elements from the walk root down to the current text's parent.
    path: Vec<&'a Element>,
    parts: Vec<&'a str>,
}

impl<'a, V: Visibility + ?Sized> Visitor<'a> for VisibleText<'a, V> {
    fn enter(&mut self, element: &'a Element) -> Visit {
        if is_non_prose_tag(&element.name) {
            return Visit::Skip;
        }
        self.path.push(element);
        Visit::Descend
    }

    fn leave(&mut self, _element: &'a Element) {
        self.path.pop();
    }

    fn text(&mut self, text: &'a str, _parent: &'a Element) {
        if self.visibility.hides_text(&self.path) {
            return;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.parts.push(trimmed);
        }
    }
}

/// Concatenate the visible text under `root` in document order.
///
/// Everything inside `script`, `style`, `noscript` and `iframe` is left out.
/// A text node is also dropped when `visibility` hides it, which by default
/// means its nearest element ancestor is hidden. Fragments are joined with a
/// space, whitespace runs collapse to one space, and the result is trimmed.
pub fn linearize<V: Visibility + ?Sized>(root: &Element, visibility: &V) -> String {
    let mut visitor = VisibleText {
        visibility,
        path: Vec::new(),
        parts: Vec::new(),
    };
    root.walk(&mut visitor);

    let joined = visitor.parts.join(" ");
    WHITESPACE_RUN.replace_all(&joined, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::visibility::{AlwaysVisible, InheritedVisibility, InlineStyleVisibility};

    fn body_text(html: &str) -> String {
        let doc = dom::parse(html);
        linearize(doc.body().unwrap(), &InlineStyleVisibility)
    }

    #[test]
    fn test_excludes_non_prose_elements() {
        let text = body_text(
            "<p>Alpha</p><script>var secret = 1;</script><style>.x{color:red}</style>\
             <noscript>enable js</noscript><iframe>frame text</iframe><p>Beta</p>",
        );
        assert_eq!(text, "Alpha Beta");
    }

    #[test]
    fn test_excludes_text_of_hidden_parents() {
        let text = body_text(
            r#"<p>shown</p><div style="display:none">gone<p>child</p></div>
               <span style="visibility: hidden">ghost</span><p hidden>nope</p><p>end</p>"#,
        );
        assert_eq!(text, "shown child end");
    }

    #[test]
    fn test_visible_child_of_hidden_parent_is_kept() {
        let doc = dom::parse(
            r#"<article><div style="visibility:hidden">ghost<span style="visibility:visible">shown</span></div></article>"#,
        );
        let resolved = |el: &Element| el.attr("style") == Some("visibility:hidden");
        assert_eq!(linearize(doc.body().unwrap(), &resolved), "shown");
    }

    #[test]
    fn test_inherited_visibility_hides_subtree() {
        let doc = dom::parse(
            r#"<p>shown</p><div style="display:none">gone<p>child</p></div><p>end</p>"#,
        );
        let inherited = InheritedVisibility(InlineStyleVisibility);
        assert_eq!(linearize(doc.body().unwrap(), &inherited), "shown end");
    }

    #[test]
    fn test_deeply_nested_text() {
        let mut el = Element::new("div").with_text("deep");
        for _ in 0..50_000 {
            el = Element::new("div").with_text(" ").with_child(el);
        }
        assert_eq!(linearize(&el, &InlineStyleVisibility), "deep");
    }

    #[test]
    fn test_collapses_whitespace() {
        let text = body_text("<p>  one \n\n two\t</p>   <p>three\u{a0}\u{a0}four</p>");
        assert_eq!(text, "one two three four");
    }

    #[test]
    fn test_inline_elements_become_separate_fragments() {
        assert_eq!(body_text("<p>foo<b>bar</b>baz</p>"), "foo bar baz");
    }

    #[test]
    fn test_hidden_root() {
        let doc = dom::parse(r#"<body style="display:none">x<p>y</p></body>"#);
        let body = doc.body().unwrap();
        assert_eq!(linearize(body, &InlineStyleVisibility), "y");
        assert_eq!(linearize(body, &InheritedVisibility(InlineStyleVisibility)), "");
        assert_eq!(linearize(body, &AlwaysVisible), "x y");
    }

    #[test]
    fn test_empty_document_text() {
        assert_eq!(body_text(""), "");
    }
}
