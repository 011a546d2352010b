//! Structured content extraction.
//!
//! Each category is an independent pass over the content root; order within
//! a category is the document order of the matched elements.

use crate::result::{Heading, ImagePosition, ListBlock, ListKind, StructuredContent, TableBlock};
use crate::tree::Element;
use crate::url_utils::{is_data_uri, Resolver};

use super::tags::{heading_level, HEADING_TAGS, LIST_TAGS};

/// Run every structured pass over `root`.
///
/// Returns the structured content together with the accepted image URLs,
/// which correspond one-to-one with `image_positions`.
#[must_use]
pub fn extract_structured(
    root: &Element,
    min_paragraph_chars: usize,
    resolver: &Resolver,
) -> (StructuredContent, Vec<String>) {
    let image_positions = extract_images(root, resolver);
    let image_urls = image_positions.iter().map(|img| img.src.clone()).collect();

    let content = StructuredContent {
        headings: extract_headings(root),
        paragraphs: extract_paragraphs(root, min_paragraph_chars),
        lists: extract_lists(root),
        tables: extract_tables(root),
        image_positions,
    };
    (content, image_urls)
}

fn trimmed_text(element: &Element) -> String {
    element.text_content().trim().to_string()
}

/// Every `h1`–`h6` with its level and index among headings.
#[must_use]
pub fn extract_headings(root: &Element) -> Vec<Heading> {
    root.select_tags(&HEADING_TAGS)
        .filter_map(|h| heading_level(&h.name).map(|level| (level, h)))
        .enumerate()
        .map(|(position, (level, h))| Heading {
            level,
            text: trimmed_text(h),
            position,
        })
        .collect()
}

/// Text of every `p` longer than `min_chars` characters once trimmed.
#[must_use]
pub fn extract_paragraphs(root: &Element, min_chars: usize) -> Vec<String> {
    root.select_tags(&["p"])
        .map(trimmed_text)
        .filter(|text| text.chars().count() > min_chars)
        .collect()
}

/// Every `ul`/`ol` holding at least one `li` (nested items included).
#[must_use]
pub fn extract_lists(root: &Element) -> Vec<ListBlock> {
    root.select_tags(&LIST_TAGS)
        .filter_map(|list| {
            let items: Vec<String> = list.select_tags(&["li"]).map(trimmed_text).collect();
            if items.is_empty() {
                return None;
            }
            let kind = if list.is("ol") {
                ListKind::Ordered
            } else {
                ListKind::Unordered
            };
            Some(ListBlock { kind, items })
        })
        .collect()
}

/// Every `table` with at least one row of `td` cells.
///
/// Headers are all `th` cells in the table; rows without any `td` (such as
/// header rows) are dropped.
#[must_use]
pub fn extract_tables(root: &Element) -> Vec<TableBlock> {
    root.select_tags(&["table"])
        .filter_map(|table| {
            let rows: Vec<Vec<String>> = table
                .select_tags(&["tr"])
                .map(|tr| tr.select_tags(&["td"]).map(trimmed_text).collect::<Vec<_>>())
                .filter(|cells| !cells.is_empty())
                .collect();
            if rows.is_empty() {
                return None;
            }
            let headers = table.select_tags(&["th"]).map(trimmed_text).collect();
            Some(TableBlock { headers, rows })
        })
        .collect()
}

/// Every `img` with a non-empty, non-`data:` source.
///
/// `position` counts accepted images only.
#[must_use]
pub fn extract_images(root: &Element, resolver: &Resolver) -> Vec<ImagePosition> {
    root.select_tags(&["img"])
        .filter_map(|img| {
            let src = resolver.resolve(img.attr("src")?);
            if src.is_empty() || is_data_uri(&src) {
                return None;
            }
            Some((src, img.attr("alt").unwrap_or_default().to_string()))
        })
        .enumerate()
        .map(|(position, (src, alt))| ImagePosition { src, alt, position })
        .collect()
}
