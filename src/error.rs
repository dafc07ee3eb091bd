use thiserror::Error;

/// Failure of a single page fetch, as reported by a transport.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure, timeout, or a non-success HTTP status
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The page tried to send us to another host
    #[error("refusing to follow {from} to another host: {to}")]
    OffHostRedirect { from: String, to: String },

    /// No WebDriver session could be created
    #[error("WebDriver session unavailable: {0}")]
    WebDriverSession(String),

    /// A WebDriver command failed inside an open session
    #[error("WebDriver command failed: {0}")]
    WebDriverCommand(#[from] fantoccini::error::CmdError),
}

/// Failure of a whole discovery run.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("malformed target URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to fetch {url} as {identity}: {source}")]
    Transport {
        url: String,
        identity: String,
        #[source]
        source: FetchError,
    },
}

/// Failure while saving one selected video.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("malformed video URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not write file: {0}")]
    Io(#[from] std::io::Error),
}
