//! Behavioural guarantees of the extraction pipeline, one test per guarantee.

use page_capture::{dom, extract, extract_html, Document, Element, ImagePosition, PageLocation};

fn location() -> PageLocation {
    PageLocation::new("https://site.test/page", "Page")
}

#[test]
fn body_is_root_when_no_hooks_match() {
    let html = r#"<body><section><p>alpha</p></section><aside>beta</aside></body>"#;
    let result = extract_html(html, &location()).expect("extraction succeeds");
    assert_eq!(result.text, "alpha beta");
}

#[test]
fn text_never_contains_non_prose_content() {
    let html = r#"<body>
        <p>visible</p>
        <script>SCRIPT_MARKER()</script>
        <style>.STYLE_MARKER {}</style>
        <noscript>NOSCRIPT_MARKER</noscript>
        <iframe>IFRAME_MARKER</iframe>
    </body>"#;
    let result = extract_html(html, &location()).expect("extraction succeeds");
    assert_eq!(result.text, "visible");
}

#[test]
fn text_excludes_nested_content_of_non_prose_elements_in_built_trees() {
    // A hand-built tree can nest elements where the parser never would.
    let document = Document::new(vec![Element::new("body")
        .with_child(Element::new("p").with_text("kept"))
        .with_child(Element::new("noscript").with_child(Element::new("p").with_text("NESTED_MARKER")))
        .into()]);
    let result = extract(&document, &location()).expect("extraction succeeds");
    assert_eq!(result.text, "kept");
}

#[test]
fn paragraph_boundary_is_strictly_greater_than_twenty() {
    let exactly_20 = "12345678901234567890";
    let exactly_21 = "123456789012345678901";
    let html = format!("<article><p> {exactly_20} </p><p>{exactly_21}</p></article>");
    let result = extract_html(&html, &location()).expect("extraction succeeds");
    assert_eq!(result.structured_content.paragraphs, vec![exactly_21.to_string()]);
}

#[test]
fn embed_wins_over_link_for_same_video() {
    let html = r#"<article>
        <iframe src="https://www.youtube.com/embed/abc123" title="Embedded title"></iframe>
        <a href="https://youtu.be/abc123">Link title</a>
    </article>"#;
    let result = extract_html(html, &location()).expect("extraction succeeds");
    assert_eq!(result.youtube_videos.len(), 1);
    assert_eq!(result.youtube_videos[0].video_id, "abc123");
    assert_eq!(result.youtube_videos[0].title, "Embedded title");
}

#[test]
fn header_only_table_is_dropped() {
    let html = r#"<article><table><tr><th>Only</th><th>Headers</th></tr></table></article>"#;
    let result = extract_html(html, &location()).expect("extraction succeeds");
    assert!(result.structured_content.tables.is_empty());
}

#[test]
fn data_uri_images_dropped_and_positions_count_accepted_images() {
    let html = r#"<article>
        <img src="https://x/a.png">
        <img src="data:image/png;base64,iVBORw0KGgo=">
        <img src="https://x/b.png">
        <img src="https://x/y.png" alt="A">
    </article>"#;
    let result = extract_html(html, &location()).expect("extraction succeeds");

    assert!(result.image_urls.iter().all(|src| !src.starts_with("data:")));
    assert!(result
        .structured_content
        .image_positions
        .iter()
        .all(|img| !img.src.starts_with("data:")));
    assert_eq!(
        result.structured_content.image_positions[2],
        ImagePosition {
            src: "https://x/y.png".to_string(),
            alt: "A".to_string(),
            position: 2,
        }
    );
    assert_eq!(result.image_urls.len(), result.structured_content.image_positions.len());
}

#[test]
fn clean_html_drops_handlers_and_nested_scripts() {
    let html = r#"<article>
        <p onclick="evil()">Click me</p>
        <blockquote>Quoted<script>steal()</script></blockquote>
    </article>"#;
    let result = extract_html(html, &location()).expect("extraction succeeds");
    assert!(!result.clean_html.contains("onclick"));
    assert!(!result.clean_html.contains("evil()"));
    assert!(!result.clean_html.contains("<script"));
    assert!(!result.clean_html.contains("steal()"));
    assert!(result.clean_html.contains("<blockquote>Quoted</blockquote>"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let html = r#"<main><h1>T</h1><p>Some paragraph long enough to count here.</p>
        <ul><li>x</li></ul><pre onmouseover="x()">code</pre></main>"#;
    let document = dom::parse(html);
    let runs: Vec<_> = (0..3)
        .map(|_| extract(&document, &location()).expect("extraction succeeds"))
        .collect();
    assert!(runs.windows(2).all(|pair| pair[0].text == pair[1].text
        && pair[0].structured_content == pair[1].structured_content
        && pair[0].clean_html == pair[1].clean_html));
}

#[test]
fn trees_and_results_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Document>();
    assert_send_sync::<page_capture::ExtractionResult>();

    let document = dom::parse("<article><p>Shared between worker threads safely.</p></article>");
    let texts: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| scope.spawn(|| extract(&document, &location()).expect("extraction succeeds").text))
            .collect();
        handles.into_iter().map(|h| h.join().expect("thread finishes")).collect()
    });
    assert_eq!(texts[0], texts[1]);
}
