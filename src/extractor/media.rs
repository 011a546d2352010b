//! Video reference resolution.
//!
//! Embeds are collected before links, and an id already present is never
//! added again, so an `<iframe>` always wins over a link to the same video.

use regex::Regex;
use tracing::trace;

use crate::patterns::{YOUTUBE_EMBED_ID, YOUTUBE_WATCH_ID};
use crate::result::VideoRef;
use crate::tree::Element;
use crate::url_utils::Resolver;

const EMBED_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];
const LINK_TARGETS: [&str; 2] = ["youtube.com/watch", "youtu.be/"];

/// Collect deduplicated video references under `root`.
#[must_use]
pub fn extract_videos(root: &Element, resolver: &Resolver, default_title: &str) -> Vec<VideoRef> {
    let mut videos: Vec<VideoRef> = Vec::new();

    for iframe in root.select_tags(&["iframe"]) {
        let Some(src) = iframe.attr("src") else { continue };
        if !EMBED_HOSTS.iter().any(|host| src.contains(host)) {
            continue;
        }
        let title = iframe.attr("title").unwrap_or_default();
        push_unique(&mut videos, &resolver.resolve(src), &YOUTUBE_EMBED_ID, title, default_title);
    }

    for link in root.select_tags(&["a"]) {
        let Some(href) = link.attr("href") else { continue };
        if !LINK_TARGETS.iter().any(|target| href.contains(target)) {
            continue;
        }
        let text = link.text_content();
        push_unique(&mut videos, &resolver.resolve(href), &YOUTUBE_WATCH_ID, text.trim(), default_title);
    }

    videos
}

fn push_unique(videos: &mut Vec<VideoRef>, url: &str, pattern: &Regex, title: &str, default_title: &str) {
    let Some(video_id) = video_id(url, pattern) else {
        trace!(url, "no video id in candidate");
        return;
    };
    if videos.iter().any(|v| v.video_id == video_id) {
        return;
    }
    let title = if title.is_empty() { default_title } else { title };
    videos.push(VideoRef::youtube(video_id, title.to_string()));
}

fn video_id<'u>(url: &'u str, pattern: &Regex) -> Option<&'u str> {
    pattern
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use pretty_assertions::assert_eq;

    fn videos(html: &str) -> Vec<VideoRef> {
        let doc = dom::parse(html);
        let resolver = Resolver::new(crate::url_utils::parse_url("https://blog.test/post"));
        extract_videos(doc.body().unwrap(), &resolver, "YouTube Video")
    }

    #[test]
    fn test_embed_wins_over_link() {
        let found = videos(
            r#"<a href="https://youtu.be/abc123">Watch on YouTube</a>
               <iframe src="https://www.youtube.com/embed/abc123" title="Launch talk"></iframe>"#,
        );
        assert_eq!(found, vec![VideoRef::youtube("abc123", "Launch talk".into())]);
        assert_eq!(found[0].url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(found[0].embed_url, "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_links_add_new_ids_with_text_title() {
        let found = videos(
            r#"<iframe src="https://www.youtube.com/embed/one"></iframe>
               <a href="https://www.youtube.com/watch?v=two&t=3"> Second </a>
               <a href="https://youtu.be/three"><img src="t.png"></a>"#,
        );
        let summary: Vec<(&str, &str)> =
            found.iter().map(|v| (v.video_id.as_str(), v.title.as_str())).collect();
        assert_eq!(
            summary,
            vec![("one", "YouTube Video"), ("two", "Second"), ("three", "YouTube Video")]
        );
    }

    #[test]
    fn test_duplicate_embeds_collapse() {
        let found = videos(
            r#"<iframe src="https://www.youtube.com/embed/same" title="First"></iframe>
               <iframe src="https://www.youtube-nocookie.com/embed/other"></iframe>
               <iframe src="https://youtu.be/same" title="Second"></iframe>"#,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "First");
    }

    #[test]
    fn test_unrecognized_urls_are_ignored() {
        let found = videos(
            r#"<iframe src="https://www.youtube.com/channel/UC123"></iframe>
               <a href="https://www.youtube.com/watch?list=PL1">playlist</a>
               <a href="https://vimeo.com/123">vimeo</a>
               <iframe src="https://player.vimeo.com/video/1"></iframe>"#,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_protocol_relative_embed_resolved() {
        let found = videos(r#"<iframe src="//www.youtube.com/embed/rel1"></iframe>"#);
        assert_eq!(found[0].video_id, "rel1");
    }
}
