use url::Url;

/// Resolve a possibly-relative reference against the page it was found on.
///
/// A reference that cannot be resolved is returned unchanged, so a strange
/// literal still shows up as a candidate instead of silently disappearing.
pub fn resolve_url(base: &Url, reference: &str) -> String {
    match base.join(reference) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            ::log::trace!("Keeping unresolvable reference {:?}: {}", reference, e);
            reference.to_string()
        }
    }
}

/// Convert a string to a sanitized filename
pub fn sanitize_filename(url: &str) -> String {
    // Remove protocol and replace invalid filename characters
    let mut name = url.replace("http://", "").replace("https://", "");
    name = name.replace(['/', '\\', ':', '?', '&', '=', '#', '%'], "_");

    // Limit filename length
    if name.chars().count() > 100 {
        name.chars().take(100).collect()
    } else {
        name
    }
}

/// Pick the local file name a downloaded video is saved under.
///
/// Uses the last path segment of the URL, falling back to the whole URL when
/// the path ends in a directory or a dot segment.
pub fn file_name_for(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");

    match segment {
        "" | "." | ".." => sanitize_filename(url.as_str()),
        name => sanitize_filename(name),
    }
}
