/// Normalizes a URL for deduplication by stripping its fragment
///
/// # Normalization Contract
///
/// The ONLY transformation applied is removing the fragment component
/// (everything from the first `#` onward). In particular:
///
/// - Trailing slashes are kept: `/page` and `/page/` are distinct entries.
/// - Query strings are kept: `/page` and `/page?a=1` are distinct entries.
/// - Scheme, host casing, and percent-encoding are untouched.
///
/// These are deliberate simplifications, not omissions: downstream consumers
/// rely on two URLs differing only by fragment collapsing to one frontier
/// entry, and on everything else staying distinct.
///
/// # Arguments
///
/// * `url` - The URL string to normalize
///
/// # Returns
///
/// The normalized URL string, used as the deduplication key
///
/// # Examples
///
/// ```
/// use sitescribe::url::normalize_url;
///
/// assert_eq!(normalize_url("http://x.com/a#sec1"), "http://x.com/a");
/// assert_eq!(normalize_url("http://x.com/a?q=1"), "http://x.com/a?q=1");
/// ```
pub fn normalize_url(url: &str) -> String {
    match url.split_once('#') {
        Some((base, _fragment)) => base.to_string(),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fragment() {
        assert_eq!(
            normalize_url("https://example.com/page#section"),
            "https://example.com/page"
        );
    }

    #[test]
    fn fragments_collapse_to_same_entry() {
        let a = normalize_url("http://x.com/a#sec1");
        let b = normalize_url("http://x.com/a#sec2");
        assert_eq!(a, b);
    }

    #[test]
    fn no_fragment_is_unchanged() {
        assert_eq!(
            normalize_url("https://example.com/page"),
            "https://example.com/page"
        );
    }

    #[test]
    fn trailing_slash_is_kept() {
        assert_ne!(
            normalize_url("https://example.com/page/"),
            normalize_url("https://example.com/page")
        );
    }

    #[test]
    fn query_string_is_kept() {
        assert_eq!(
            normalize_url("https://example.com/page?b=2&a=1#frag"),
            "https://example.com/page?b=2&a=1"
        );
    }

    #[test]
    fn only_first_hash_matters() {
        assert_eq!(
            normalize_url("https://example.com/a#b#c"),
            "https://example.com/a"
        );
    }

    #[test]
    fn fragment_only_suffix_becomes_bare_url() {
        assert_eq!(
            normalize_url("https://example.com/#"),
            "https://example.com/"
        );
    }
}
