use crate::config::{ClientIdentity, ScraperConfig};
use crate::error::DownloadError;
use crate::utils::file_name_for;
use reqwest::header::USER_AGENT;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Saves selected videos into the output directory
#[derive(Debug, Clone)]
pub struct Downloader {
    client: reqwest::Client,
    output_dir: PathBuf,
}

impl Downloader {
    pub fn new(config: &ScraperConfig) -> Result<Self, DownloadError> {
        // Only connecting is bounded; a large video may take a long time to stream.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            output_dir: config.output_dir.clone(),
        })
    }

    /// Streams `video_url` to disk and returns the path it was written to.
    ///
    /// When `identity` is given its user agent is sent, so the file is
    /// requested the same way the page was.
    pub async fn download(
        &self,
        video_url: &str,
        identity: Option<&ClientIdentity>,
    ) -> Result<PathBuf, DownloadError> {
        let url = Url::parse(video_url).map_err(|source| DownloadError::MalformedUrl {
            url: video_url.to_string(),
            source,
        })?;
        let path = self.output_dir.join(file_name_for(&url));

        let mut request = self.client.get(url.clone());
        if let Some(identity) = identity {
            request = request.header(USER_AGENT, identity.user_agent.as_str());
        }
        let mut response = request.send().await?.error_for_status()?;

        let partial = partial_path(&path);
        let written = match stream_to_file(&mut response, &partial).await {
            Ok(written) => written,
            Err(e) => {
                if let Err(remove_err) = tokio::fs::remove_file(&partial).await {
                    ::log::debug!("Could not remove {}: {}", partial.display(), remove_err);
                }
                return Err(e);
            }
        };
        tokio::fs::rename(&partial, &path).await?;

        ::log::info!("Saved {} ({} bytes) to {}", url, written, path.display());
        Ok(path)
    }
}

/// Where a download is written until it has fully arrived
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

async fn stream_to_file(
    response: &mut reqwest::Response,
    path: &Path,
) -> Result<u64, DownloadError> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        ::log::trace!("{}: {} bytes written", path.display(), written);
    }
    file.flush().await?;
    Ok(written)
}
