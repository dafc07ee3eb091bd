use crate::config::ClientIdentity;
use crate::error::DiscoverError;
use crate::extract;
use crate::fetch::Fetcher;
use crate::results::Discovery;
use url::Url;

/// Finds the video URLs on `target`, trying each identity in order.
///
/// The first identity whose page yields any video wins and later identities
/// are not tried. A fetch failure ends the run immediately instead of
/// falling through to the next identity. If no identity finds anything the
/// result is an empty `Discovery`, not an error.
pub async fn discover<F: Fetcher>(
    fetcher: &F,
    target: &str,
    identities: &[ClientIdentity],
) -> Result<Discovery, DiscoverError> {
    let page_url = Url::parse(target).map_err(|source| DiscoverError::MalformedUrl {
        url: target.to_string(),
        source,
    })?;

    for identity in identities {
        ::log::info!("Scraping {} as {}", page_url, identity.name);

        let markup = fetcher
            .fetch(&page_url, identity)
            .await
            .map_err(|source| DiscoverError::Transport {
                url: page_url.to_string(),
                identity: identity.name.clone(),
                source,
            })?;

        let videos = extract::extract_videos(&markup, &page_url);
        if !videos.is_empty() {
            ::log::info!(
                "Identity {} found {} video links on {}",
                identity.name,
                videos.len(),
                page_url
            );
            return Ok(Discovery::found(
                page_url.to_string(),
                identity.name.clone(),
                videos,
            ));
        }

        ::log::info!("Identity {} found no video links", identity.name);
    }

    Ok(Discovery::empty(page_url.to_string()))
}
