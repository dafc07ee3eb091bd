use crate::config::{ClientIdentity, ScraperConfig};
use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::filter::HostScope;
use reqwest::header::{REFERER, USER_AGENT};
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Raised from inside the redirect policy; turned back into
/// `FetchError::OffHostRedirect` once reqwest hands it back.
#[derive(Debug, Error)]
#[error("redirect from {from} leaves the page host: {to}")]
struct OffHost {
    from: String,
    to: String,
}

/// Fetches pages with plain HTTP requests
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(same_host_policy(config.max_redirects))
            .build()?;
        Ok(Self { client })
    }
}

/// Follows redirects only while they stay on the host of the first request
fn same_host_policy(max_redirects: usize) -> Policy {
    Policy::custom(move |attempt| {
        let Some(first) = attempt.previous().first() else {
            return attempt.follow();
        };
        if !HostScope::for_url(first).allows(attempt.url()) {
            let off_host = OffHost {
                from: first.to_string(),
                to: attempt.url().to_string(),
            };
            return attempt.error(off_host);
        }
        if attempt.previous().len() > max_redirects {
            return attempt.error(format!("more than {} redirects", max_redirects));
        }
        attempt.follow()
    })
}

fn classify(err: reqwest::Error) -> FetchError {
    let off_host = std::error::Error::source(&err).and_then(|s| s.downcast_ref::<OffHost>());
    match off_host {
        Some(OffHost { from, to }) => {
            ::log::warn!("Refusing off-host redirect from {} to {}", from, to);
            FetchError::OffHostRedirect {
                from: from.clone(),
                to: to.clone(),
            }
        }
        None => FetchError::Http(err),
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url, identity: &ClientIdentity) -> Result<String, FetchError> {
        let started = std::time::Instant::now();
        ::log::debug!("GET {} as {}", url, identity.name);

        let mut request = self
            .client
            .get(url.clone())
            .header(USER_AGENT, identity.user_agent.as_str())
            .header(REFERER, url.as_str());
        // User-Agent and Referer are set above; an identity may not repeat them
        let headers = identity.headers.iter().filter(|(name, _)| {
            !name.eq_ignore_ascii_case(USER_AGENT.as_str())
                && !name.eq_ignore_ascii_case(REFERER.as_str())
        });
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(classify)?;
        let response = response.error_for_status()?;
        if response.url() != url {
            ::log::debug!("{} redirected to {}", url, response.url());
        }
        let body = response.text().await?;

        ::log::debug!(
            "Fetched {} bytes from {} in {:.2} seconds",
            body.len(),
            url,
            started.elapsed().as_secs_f64()
        );
        Ok(body)
    }
}
