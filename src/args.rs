use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use vidscout::{FetchBackend, ScraperConfig};

#[derive(Parser, Debug)]
#[command(name = "vidscout")]
#[command(about = "Finds video links on a web page and downloads the ones you pick")]
#[command(version)]
pub struct Args {
    /// URL of the webpage to scrape for videos
    pub page: Option<String>,

    /// URL of the webpage (alternative to the positional argument)
    #[arg(short = 'u', long = "url", visible_short_alias = 'i')]
    pub url: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How to fetch the page
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// WebDriver endpoint for the webdriver backend
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory to save downloads in
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Videos to download, e.g. "1,3" (skips the prompt)
    #[arg(short, long)]
    pub select: Option<String>,

    /// Only list the links found, never download
    #[arg(long)]
    pub list: bool,

    /// Print the discovery report as JSON (implies --list)
    #[arg(long)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Http,
    Webdriver,
}

impl From<BackendArg> for FetchBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Http => FetchBackend::Http,
            BackendArg::Webdriver => FetchBackend::WebDriver,
        }
    }
}

impl Args {
    /// The page to scrape: the positional argument, else --url/-u/-i
    pub fn target(&self) -> Option<&str> {
        [self.page.as_deref(), self.url.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_to(&self, mut config: ScraperConfig) -> ScraperConfig {
        if let Some(backend) = self.backend {
            config.backend = backend.into();
        }
        if let Some(webdriver_url) = &self.webdriver_url {
            config.webdriver_url = webdriver_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        config
    }
}
