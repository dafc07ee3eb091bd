// Re-export modules
pub mod config;
pub mod discover;
pub mod download;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod results;
pub mod select;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ClientIdentity, FetchBackend, ScraperConfig};
pub use discover::discover;
pub use error::{DiscoverError, DownloadError, FetchError};
pub use fetch::{Fetcher, Transport};
pub use results::Discovery;

/// Builder for running discovery with a given transport
pub struct Discoverer<F: Fetcher> {
    fetcher: F,
    identities: Vec<ClientIdentity>,
}

impl<F: Fetcher> Discoverer<F> {
    /// Create a discoverer using `fetcher` and the built-in identities
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            identities: ClientIdentity::defaults(),
        }
    }

    /// Replace the identities tried for each page
    pub fn with_identities(mut self, identities: Vec<ClientIdentity>) -> Self {
        self.identities = identities;
        self
    }

    /// Take the identities from a configuration
    pub fn with_config(mut self, config: &ScraperConfig) -> Self {
        self.identities = config.identities.clone();
        self
    }

    /// Look up an identity by the name a `Discovery` reports
    pub fn identity(&self, name: &str) -> Option<&ClientIdentity> {
        self.identities.iter().find(|identity| identity.name == name)
    }

    /// Find the video URLs on `target`
    pub async fn discover(&self, target: &str) -> Result<Discovery, DiscoverError> {
        discover::discover(&self.fetcher, target, &self.identities).await
    }
}
