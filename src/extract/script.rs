use crate::extract::{Discovered, extension_alternation};
use regex::Regex;
use std::sync::LazyLock;

/// An absolute http(s) URL ending in a video extension, with an optional
/// query string. Whitespace, quotes and angle brackets end a match.
static EMBEDDED_VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"https?://[^\s'"<>]+?\.({})(\?[^\s'"<>]*)?"#,
        extension_alternation()
    ))
    .expect("valid embedded video URL pattern")
});

/// Finds absolute video URLs in raw script text, in the order they appear.
pub fn find_video_urls(text: &str) -> impl Iterator<Item = &str> {
    EMBEDDED_VIDEO_URL.find_iter(text).map(|m| m.as_str())
}

/// Adds every absolute video URL in `text` to `discovered`. Matches are taken
/// verbatim; they are already absolute.
pub fn scan(text: &str, discovered: &mut Discovered) {
    for url in find_video_urls(text) {
        discovered.insert(url);
    }
}
