use serde::{Deserialize, Serialize};

/// Outcome of one discovery run for a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    /// URL of the page that was scraped
    pub page_url: String,

    /// Name of the identity whose pass produced the videos
    pub identity: Option<String>,

    /// Video URLs in order of first discovery
    pub videos: Vec<String>,
}

impl Discovery {
    /// A run where `identity` found `videos`
    pub fn found(page_url: String, identity: String, videos: Vec<String>) -> Self {
        Self {
            page_url,
            identity: Some(identity),
            videos,
        }
    }

    /// A run where no identity found anything
    pub fn empty(page_url: String) -> Self {
        Self {
            page_url,
            identity: None,
            videos: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn into_videos(self) -> Vec<String> {
        self.videos
    }
}
