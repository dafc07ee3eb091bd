pub mod html;
pub mod json_ld;
pub mod script;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use url::Url;

/// File extensions treated as video resources
pub const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "webm", "ogg", "mov", "mkv", "avi"];

/// `VIDEO_EXTENSIONS` as a regex alternation, e.g. `mp4|webm|...`
fn extension_alternation() -> String {
    VIDEO_EXTENSIONS.join("|")
}

/// Video URLs found during one extraction pass.
///
/// Holds the dedup set and the ordered result sequence together. `insert` is
/// the only way in, so a URL lands in the sequence exactly when it is first
/// added to the set. Dedup is on the literal URL string.
#[derive(Debug, Default, Clone)]
pub struct Discovered {
    seen: HashSet<String>,
    urls: Vec<String>,
}

impl Discovered {
    /// Creates an empty set for a fresh pass
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `url` if it has not been seen in this pass.
    /// Returns true when it was new.
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.seen.contains(&url) {
            ::log::trace!("Already discovered: {}", url);
            return false;
        }
        ::log::debug!("Discovered video: {}", url);
        self.seen.insert(url.clone());
        self.urls.push(url);
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// URLs in order of first discovery
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }
}

/// Runs every extraction rule over `markup` and returns the video URLs it
/// references, de-duplicated, in order of first discovery.
///
/// `base` is the URL the markup was fetched from and is used to resolve
/// relative references.
pub fn extract_videos(markup: &str, base: &Url) -> Vec<String> {
    let mut discovered = Discovered::new();
    html::extract(markup, base, &mut discovered);
    discovered.into_urls()
}
