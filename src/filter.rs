use url::Url;

/// Restricts page navigation to the host of the requested page.
///
/// Discovery never leaves the entry page, so a redirect or client-side
/// navigation is only acceptable while it stays on the same host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostScope {
    host: Option<String>,
}

impl HostScope {
    /// Scope limited to the host of `url`
    pub fn for_url(url: &Url) -> Self {
        Self {
            host: url.host_str().map(|h| h.to_ascii_lowercase()),
        }
    }

    /// Host this scope accepts, if the entry URL had one
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Whether `url` is on the allowed host
    pub fn allows(&self, url: &Url) -> bool {
        match (&self.host, url.host_str()) {
            (Some(required), Some(host)) => required.eq_ignore_ascii_case(host),
            // Host-less URLs (data:, about:) never count as in scope
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> HostScope {
        HostScope::for_url(&Url::parse("https://site.example/page").unwrap())
    }

    #[test]
    fn test_same_host_allowed() {
        let scope = scope();
        assert_eq!(scope.host(), Some("site.example"));
        assert!(scope.allows(&Url::parse("https://site.example/other?x=1").unwrap()));
        assert!(scope.allows(&Url::parse("http://SITE.example:8080/").unwrap()));
    }

    #[test]
    fn test_other_hosts_rejected() {
        let scope = scope();
        assert!(!scope.allows(&Url::parse("https://cdn.site.example/").unwrap()));
        assert!(!scope.allows(&Url::parse("https://evil.example/page").unwrap()));
        assert!(!scope.allows(&Url::parse("about:blank").unwrap()));
    }

    #[test]
    fn test_hostless_entry_allows_nothing() {
        let scope = HostScope::for_url(&Url::parse("data:text/html,hi").unwrap());
        assert_eq!(scope.host(), None);
        assert!(!scope.allows(&Url::parse("https://site.example/").unwrap()));
    }
}
