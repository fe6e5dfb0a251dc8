use url::Url;

/// Extracts the host component of a URL, including any explicit port
///
/// Used for the same-domain filter: a discovered link is only followed when
/// this value is byte-for-byte equal to the seed's. Subdomains do NOT match
/// (`blog.example.com` != `example.com`), and neither do two servers on the
/// same machine behind different ports. A scheme-default port is omitted, so
/// `https://example.com` and `https://example.com:443` compare equal.
///
/// # Arguments
///
/// * `url` - The URL to extract the host from
///
/// # Returns
///
/// * `Some(String)` - The lowercase host, with `:port` appended when explicit
/// * `None` - If the URL has no host (e.g. `mailto:` links)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitescribe::url::extract_host;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(extract_host(&url), Some("127.0.0.1:8080".to_string()));
///
/// let url = Url::parse("mailto:someone@example.com").unwrap();
/// assert_eq!(extract_host(&url), None);
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_simple_host() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com".to_string()));
    }

    #[test]
    fn subdomain_is_a_different_host() {
        let url = Url::parse("https://blog.example.com/post").unwrap();
        assert_eq!(extract_host(&url), Some("blog.example.com".to_string()));
    }

    #[test]
    fn host_is_lowercased() {
        let url = Url::parse("https://EXAMPLE.COM/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com".to_string()));
    }

    #[test]
    fn explicit_port_is_included() {
        let url = Url::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(extract_host(&url), Some("127.0.0.1:8080".to_string()));
    }

    #[test]
    fn scheme_default_port_is_omitted() {
        let url = Url::parse("https://example.com:443/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com".to_string()));
    }

    #[test]
    fn mailto_has_no_host() {
        let url = Url::parse("mailto:test@example.com").unwrap();
        assert_eq!(extract_host(&url), None);
    }

    #[test]
    fn tel_has_no_host() {
        let url = Url::parse("tel:+1234567890").unwrap();
        assert_eq!(extract_host(&url), None);
    }
}
