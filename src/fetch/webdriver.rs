use crate::config::{ClientIdentity, ScraperConfig};
use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::filter::HostScope;
use fantoccini::{Client, ClientBuilder};
use serde_json::{Map, Value, json};
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Local endpoints tried when the configured WebDriver URL does not answer
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Fetches pages through a real browser driven over WebDriver.
///
/// Every identity gets its own session, because the user agent can only be
/// set when the browser starts.
#[derive(Debug, Clone)]
pub struct WebDriverFetcher {
    webdriver_url: String,
    timeout: Duration,
}

impl WebDriverFetcher {
    pub fn new(config: &ScraperConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    async fn connect(&self, identity: &ClientIdentity) -> Result<Client, FetchError> {
        let caps = capabilities(identity);

        match self.try_connect(&caps, &self.webdriver_url).await {
            Ok(client) => {
                ::log::debug!(
                    "Connected to WebDriver at {} as {}",
                    self.webdriver_url,
                    identity.name
                );
                return Ok(client);
            }
            Err(reason) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    self.webdriver_url,
                    reason
                );
            }
        }

        for url in FALLBACK_WEBDRIVER_URLS {
            if url == self.webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            match self.try_connect(&caps, url).await {
                Ok(client) => {
                    ::log::debug!("Connected to fallback WebDriver at {}", url);
                    return Ok(client);
                }
                Err(reason) => ::log::debug!("Fallback WebDriver at {} failed: {}", url, reason),
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(FetchError::WebDriverSession(format!(
            "no WebDriver server reachable at {} or the usual local ports",
            self.webdriver_url
        )))
    }

    /// One session attempt, bounded by the page timeout so a silent endpoint
    /// cannot stall the run
    async fn try_connect(&self, caps: &Map<String, Value>, url: &str) -> Result<Client, String> {
        let mut builder = ClientBuilder::native();
        builder.capabilities(caps.clone());
        let attempt = builder.connect(url);
        match timeout(self.timeout, attempt).await {
            Ok(Ok(client)) => Ok(client),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err(format!("no answer within {:?}", self.timeout)),
        }
    }

    async fn load(&self, client: &Client, url: &Url) -> Result<String, FetchError> {
        let navigation = timeout(self.timeout, client.goto(url.as_str())).await;
        match navigation {
            Ok(result) => result?,
            Err(_) => {
                return Err(FetchError::WebDriverSession(format!(
                    "timed out after {:?} loading {}",
                    self.timeout, url
                )));
            }
        }

        let landed = client.current_url().await?;
        if !HostScope::for_url(url).allows(&landed) {
            ::log::warn!("Refusing off-host navigation from {} to {}", url, landed);
            return Err(FetchError::OffHostRedirect {
                from: url.to_string(),
                to: landed.to_string(),
            });
        }

        Ok(client.source().await?)
    }
}

impl Fetcher for WebDriverFetcher {
    async fn fetch(&self, url: &Url, identity: &ClientIdentity) -> Result<String, FetchError> {
        let client = self.connect(identity).await?;
        let result = self.load(&client, url).await;

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }

        result
    }
}

/// Headless Chrome and Firefox capabilities carrying the identity's user agent
pub fn capabilities(identity: &ClientIdentity) -> Map<String, Value> {
    let mut caps = Map::new();
    caps.insert(
        "goog:chromeOptions".to_string(),
        json!({
            "args": [
                "--headless=new",
                format!("--user-agent={}", identity.user_agent),
            ]
        }),
    );
    caps.insert(
        "moz:firefoxOptions".to_string(),
        json!({
            "args": ["-headless"],
            "prefs": { "general.useragent.override": identity.user_agent }
        }),
    );
    caps
}
