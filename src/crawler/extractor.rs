//! HTML extractor: visible text and hyperlink targets
//!
//! Text extraction is a deliberately shallow structural heuristic: only
//! heading, paragraph, and list-item elements contribute, in document order.
//! Tables, images, scripts, and everything else are ignored, and text
//! duplicated by nested selections is accepted as-is.

use scraper::{Html, Selector};
use url::Url;

/// Elements whose trimmed text makes up the page's extracted content
const TEXT_SELECTORS: &str = "h1, h2, h3, p, li";

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Flattened visible text, one element per line
    pub text: String,

    /// All anchor targets, resolved to absolute URLs
    pub links: Vec<Url>,
}

/// Parses an HTML body and extracts text plus hyperlink targets
///
/// # Link handling
///
/// Every `<a>` with an `href` is resolved against `base_url`, so relative
/// paths, protocol-relative links, and absolute links all work. Hrefs that
/// fail to resolve are silently dropped. `mailto:`, `tel:`, and
/// `javascript:` hrefs are kept permissively: they resolve to hostless URLs
/// and get rejected by the frontier's same-domain filter instead.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The URL the page was fetched from
///
/// # Example
///
/// ```
/// use sitescribe::crawler::extract_page;
/// use url::Url;
///
/// let html = r#"<html><body><h1>Title</h1><a href="/page">Link</a></body></html>"#;
/// let base = Url::parse("https://example.com/").unwrap();
/// let page = extract_page(html, &base);
/// assert_eq!(page.text, "Title");
/// assert_eq!(page.links[0].as_str(), "https://example.com/page");
/// ```
pub fn extract_page(html: &str, base_url: &Url) -> ExtractedPage {
    let document = Html::parse_document(html);

    ExtractedPage {
        text: extract_text(&document),
        links: extract_links(&document, base_url),
    }
}

/// Joins the trimmed text of all content elements with newlines
fn extract_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse(TEXT_SELECTORS) else {
        return String::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolves every anchor href against the base URL
fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                let href = href.trim();
                if href.is_empty() {
                    continue;
                }
                if let Ok(absolute) = base_url.join(href) {
                    links.push(absolute);
                }
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/docs/page").unwrap()
    }

    #[test]
    fn extracts_headings_paragraphs_and_list_items() {
        let html = r#"
            <html><body>
                <h1>Welcome</h1>
                <h2>Section</h2>
                <h3>Subsection</h3>
                <p>A paragraph.</p>
                <ul><li>First</li><li>Second</li></ul>
            </body></html>
        "#;
        let page = extract_page(html, &base_url());
        assert_eq!(
            page.text,
            "Welcome\nSection\nSubsection\nA paragraph.\nFirst\nSecond"
        );
    }

    #[test]
    fn ignores_other_elements() {
        let html = r#"
            <html><body>
                <table><tr><td>cell</td></tr></table>
                <div>just a div</div>
                <h4>minor heading</h4>
                <p>kept</p>
            </body></html>
        "#;
        let page = extract_page(html, &base_url());
        assert_eq!(page.text, "kept");
    }

    #[test]
    fn discards_empty_elements() {
        let html = r#"<html><body><p>   </p><p>text</p><h1></h1></body></html>"#;
        let page = extract_page(html, &base_url());
        assert_eq!(page.text, "text");
    }

    #[test]
    fn text_is_trimmed() {
        let html = r#"<html><body><p>  spaced out  </p></body></html>"#;
        let page = extract_page(html, &base_url());
        assert_eq!(page.text, "spaced out");
    }

    #[test]
    fn nested_duplicated_text_is_kept() {
        // A <p> inside an <li> is selected twice; that overlap is accepted
        let html = r#"<html><body><ul><li><p>twice</p></li></ul></body></html>"#;
        let page = extract_page(html, &base_url());
        assert_eq!(page.text, "twice\ntwice");
    }

    #[test]
    fn resolves_relative_link() {
        let html = r#"<html><body><a href="other">Link</a></body></html>"#;
        let page = extract_page(html, &base_url());
        assert_eq!(page.links[0].as_str(), "https://example.com/docs/other");
    }

    #[test]
    fn resolves_root_relative_link() {
        let html = r#"<html><body><a href="/about">Link</a></body></html>"#;
        let page = extract_page(html, &base_url());
        assert_eq!(page.links[0].as_str(), "https://example.com/about");
    }

    #[test]
    fn resolves_protocol_relative_link() {
        let html = r#"<html><body><a href="//cdn.example.com/x">Link</a></body></html>"#;
        let page = extract_page(html, &base_url());
        assert_eq!(page.links[0].as_str(), "https://cdn.example.com/x");
    }

    #[test]
    fn keeps_absolute_link() {
        let html = r#"<html><body><a href="https://other.com/page">Link</a></body></html>"#;
        let page = extract_page(html, &base_url());
        assert_eq!(page.links[0].as_str(), "https://other.com/page");
    }

    #[test]
    fn anchor_without_href_is_skipped() {
        let html = r#"<html><body><a name="here">No href</a><a href="/yes">Yes</a></body></html>"#;
        let page = extract_page(html, &base_url());
        assert_eq!(page.links.len(), 1);
    }

    #[test]
    fn mailto_is_kept_for_downstream_filtering() {
        let html = r#"<html><body><a href="mailto:test@example.com">Email</a></body></html>"#;
        let page = extract_page(html, &base_url());
        assert_eq!(page.links.len(), 1);
        assert_eq!(page.links[0].scheme(), "mailto");
    }

    #[test]
    fn fragment_link_resolves_to_page_with_fragment() {
        let html = r##"<html><body><a href="#section">Jump</a></body></html>"##;
        let page = extract_page(html, &base_url());
        assert_eq!(
            page.links[0].as_str(),
            "https://example.com/docs/page#section"
        );
    }

    #[test]
    fn empty_page_yields_nothing() {
        let page = extract_page("<html><body></body></html>", &base_url());
        assert!(page.text.is_empty());
        assert!(page.links.is_empty());
    }
}
