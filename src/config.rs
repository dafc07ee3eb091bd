use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A client fingerprint used to request the page.
///
/// Some sites serve different markup to different browsers, so the same page
/// is requested once per identity until one of them yields videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentity {
    /// Short label used in logs and reports
    pub name: String,

    /// Value sent as the User-Agent header
    pub user_agent: String,

    /// Extra request headers implied by this client
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

impl ClientIdentity {
    /// Create an identity with the default browser headers
    pub fn new(name: &str, user_agent: &str) -> Self {
        Self {
            name: name.to_string(),
            user_agent: user_agent.to_string(),
            headers: default_headers(),
        }
    }

    /// Built-in identities: Chromium, Firefox, then Safari
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "chrome",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
            ),
            Self::new(
                "firefox",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:124.0) Gecko/20100101 Firefox/124.0",
            ),
            Self::new(
                "safari",
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_2) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.2 Safari/605.1.15",
            ),
        ]
    }
}

/// How page markup is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchBackend {
    /// Plain HTTP requests
    #[default]
    Http,
    /// A browser driven over WebDriver
    WebDriver,
}

/// Configuration for a discovery run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Identities to try, in order
    #[serde(default = "ClientIdentity::defaults")]
    pub identities: Vec<ClientIdentity>,

    /// Transport used to fetch the page
    #[serde(default)]
    pub backend: FetchBackend,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of same-host redirects followed for one page
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Directory downloads are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            identities: ClientIdentity::defaults(),
            backend: FetchBackend::default(),
            webdriver_url: default_webdriver_url(),
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
            output_dir: default_output_dir(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that could never find anything
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.identities.is_empty() {
            return Err("at least one client identity must be configured".into());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than zero".into());
        }
        Ok(())
    }

    /// Apply the WEBDRIVER_URL environment variable, if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }
}

/// Headers every default identity sends alongside its user agent
fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
        ),
        ("Accept-Language".to_string(), "en-US,en;q=0.9".to_string()),
    ])
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_redirects() -> usize {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
