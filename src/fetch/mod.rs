pub mod http;
pub mod webdriver;

use crate::config::{ClientIdentity, FetchBackend, ScraperConfig};
use crate::error::FetchError;
use url::Url;

pub use http::HttpFetcher;
pub use webdriver::WebDriverFetcher;

/// Obtains the markup of a single page as seen by one client identity.
///
/// Implementations must stay on the page's own host and must not follow
/// links out of the page. Timeouts are theirs to enforce and surface as an
/// error.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &Url, identity: &ClientIdentity) -> Result<String, FetchError>;
}

/// The configured transport
pub enum Transport {
    Http(HttpFetcher),
    WebDriver(WebDriverFetcher),
}

impl Transport {
    /// Build the transport selected by `config.backend`
    pub fn from_config(config: &ScraperConfig) -> Result<Self, FetchError> {
        match config.backend {
            FetchBackend::Http => Ok(Transport::Http(HttpFetcher::new(config)?)),
            FetchBackend::WebDriver => Ok(Transport::WebDriver(WebDriverFetcher::new(config))),
        }
    }
}

impl Fetcher for Transport {
    async fn fetch(&self, url: &Url, identity: &ClientIdentity) -> Result<String, FetchError> {
        match self {
            Transport::Http(fetcher) => fetcher.fetch(url, identity).await,
            Transport::WebDriver(fetcher) => fetcher.fetch(url, identity).await,
        }
    }
}
