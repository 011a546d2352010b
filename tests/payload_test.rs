use chrono::{TimeZone, Utc};
use page_capture::{extract_html, CapturePayload, DisplayTier, Error, PageLocation};

fn location() -> PageLocation {
    PageLocation::new("https://videos.test/watch-party", "Watch party")
}

#[test]
fn payload_from_extracted_page() {
    let html = r#"<html><head><link rel="icon" href="/i.ico"></head><body><article>
        <h1>Watch party</h1>
        <p>Tonight we are watching the keynote together online.</p>
        <iframe src="https://www.youtube.com/embed/key-note" title="Keynote"></iframe>
        <img src="/poster.jpg" alt="Poster">
    </article></body></html>"#;
    let result = extract_html(html, &location()).expect("extraction succeeds");
    let captured_at = Utc.with_ymd_and_hms(2026, 1, 2, 9, 5, 7).unwrap();
    let payload = CapturePayload::new(&result, &captured_at).expect("payload builds");

    assert_eq!(payload.text, result.text);
    assert!(payload.enable_chunking);
    assert_eq!(payload.image_urls, vec!["https://videos.test/poster.jpg".to_string()]);

    let metadata = &payload.metadata;
    assert_eq!(metadata.domain, "videos.test");
    assert_eq!(metadata.favicon, "https://videos.test/i.ico");
    assert_eq!(metadata.timestamp, "2026-01-02T09:05:07.000Z");
    assert_eq!(metadata.timestamp_readable, "1/2/2026, 9:05:07 AM");
    assert_eq!(metadata.youtube_videos[0].video_id, "key-note");
    assert!(metadata.structured_content.is_some());
    assert!(metadata.clean_html.as_deref().is_some_and(|h| h.contains("<h1>Watch party</h1>")));

    let json: serde_json::Value =
        serde_json::from_str(&payload.to_json().expect("serializes")).expect("valid json");
    assert_eq!(json["metadata"]["youtube_videos"][0]["embed_url"], "https://www.youtube.com/embed/key-note");
    assert_eq!(json["metadata"]["structured_content"]["images_positions"][0]["alt"], "Poster");
}

#[test]
fn payload_rejects_page_without_text() {
    let html = r#"<article><iframe src="https://www.youtube.com/embed/only"></iframe></article>"#;
    let result = extract_html(html, &location()).expect("extraction succeeds");
    assert_eq!(result.display_tier(), DisplayTier::VideosOnly);
    assert!(matches!(CapturePayload::now(&result), Err(Error::NoContent)));
}

#[test]
fn clean_html_tier_when_structure_is_empty() {
    // A short paragraph is filtered from the structure but still present as HTML.
    let html = r#"<article><p>Too short</p></article>"#;
    let result = extract_html(html, &location()).expect("extraction succeeds");
    assert!(result.structured_content.is_empty());
    assert_eq!(result.clean_html, "<p>Too short</p>");
    assert_eq!(result.display_tier(), DisplayTier::CleanHtml);
}
