use crate::extract::{Discovered, extension_alternation, json_ld, script};
use crate::utils::resolve_url;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

static VIDEO_SOURCE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("video source[src]").expect("valid selector"));
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));
static JSON_LD: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("valid selector")
});
static SCRIPT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script").expect("valid selector"));

/// Matches an href whose path (ignoring any query string) ends in a video extension
static VIDEO_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\.({})(\?.*)?$", extension_alternation()))
        .expect("valid video href pattern")
});

/// Walks parsed markup and adds every video URL it references to `discovered`.
///
/// Rules run in a fixed sequence: `<video>` sources, anchors to video files,
/// JSON-LD blocks, then the raw text of every script (JSON-LD included).
/// Nothing here fails; an element that does not yield a usable URL is skipped.
pub fn extract(markup: &str, base: &Url, discovered: &mut Discovered) {
    let doc = Html::parse_document(markup);

    let before = discovered.len();
    for source in doc.select(&VIDEO_SOURCE) {
        if let Some(src) = non_blank_attr(&source, "src") {
            discovered.insert(resolve_url(base, src));
        }
    }
    ::log::debug!(
        "Video sources yielded {} new URLs",
        discovered.len() - before
    );

    let before = discovered.len();
    for anchor in doc.select(&ANCHOR) {
        if let Some(href) = non_blank_attr(&anchor, "href") {
            if is_video_href(href) {
                discovered.insert(resolve_url(base, href));
            }
        }
    }
    ::log::debug!("Anchors yielded {} new URLs", discovered.len() - before);

    let before = discovered.len();
    for block in doc.select(&JSON_LD) {
        json_ld::scan_block(&element_text(&block), base, discovered);
    }
    ::log::debug!("JSON-LD yielded {} new URLs", discovered.len() - before);

    let before = discovered.len();
    for script_el in doc.select(&SCRIPT) {
        script::scan(&element_text(&script_el), discovered);
    }
    ::log::debug!("Scripts yielded {} new URLs", discovered.len() - before);
}

/// Whether an href points at a video file, judged by its extension
pub fn is_video_href(href: &str) -> bool {
    VIDEO_HREF.is_match(href)
}

fn non_blank_attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element
        .value()
        .attr(name)
        .filter(|value| !value.trim().is_empty())
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}
