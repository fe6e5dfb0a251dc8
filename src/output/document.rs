//! Pure rendering of the knowledge-base document

/// Delimiter line between page sections (50 `=` characters)
const BANNER: &str = "==================================================";

/// Text extracted from one successfully processed page
///
/// Records are appended in visitation order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// The URL the page was fetched from
    pub url: String,

    /// The flattened visible text of the page (never empty)
    pub text: String,
}

/// Renders the complete knowledge-base document
///
/// # Format
///
/// ```text
/// Scrape Base URL: <seed>
/// Total Pages Scraped: <N>
///
/// ==================================================
/// URL: <page url>
/// ==================================================
/// <page text>
/// ```
///
/// # Arguments
///
/// * `seed_url` - The seed URL the crawl started from
/// * `pages_visited` - Number of distinct URLs visited
/// * `records` - Page records in accumulation order
pub fn render_document(seed_url: &str, pages_visited: usize, records: &[PageRecord]) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("Scrape Base URL: {}\n", seed_url));
    doc.push_str(&format!("Total Pages Scraped: {}\n", pages_visited));

    let sections: Vec<String> = records
        .iter()
        .map(|record| format!("\n\n{}\nURL: {}\n{}\n{}", BANNER, record.url, BANNER, record.text))
        .collect();
    doc.push_str(&sections.join("\n"));

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<PageRecord> {
        vec![
            PageRecord {
                url: "http://example.com/".to_string(),
                text: "Welcome".to_string(),
            },
            PageRecord {
                url: "http://example.com/about".to_string(),
                text: "About us\nSince 1999".to_string(),
            },
        ]
    }

    #[test]
    fn banner_is_fifty_equals_signs() {
        assert_eq!(BANNER.len(), 50);
        assert!(BANNER.chars().all(|c| c == '='));
    }

    #[test]
    fn header_names_seed_and_count() {
        let doc = render_document("http://example.com", 2, &records());
        let mut lines = doc.lines();
        assert_eq!(lines.next(), Some("Scrape Base URL: http://example.com"));
        assert_eq!(lines.next(), Some("Total Pages Scraped: 2"));
    }

    #[test]
    fn each_record_gets_a_banner_section() {
        let doc = render_document("http://example.com", 2, &records());
        assert_eq!(doc.matches(BANNER).count(), 4);
        assert!(doc.contains("URL: http://example.com/\n"));
        assert!(doc.contains("URL: http://example.com/about\n"));
    }

    #[test]
    fn records_appear_in_accumulation_order() {
        let doc = render_document("http://example.com", 2, &records());
        let first = doc.find("URL: http://example.com/\n").unwrap();
        let second = doc.find("URL: http://example.com/about").unwrap();
        assert!(first < second);
    }

    #[test]
    fn page_text_follows_its_banner() {
        let doc = render_document("http://example.com", 2, &records());
        assert!(doc.contains(&format!("URL: http://example.com/\n{}\nWelcome", BANNER)));
        assert!(doc.contains("About us\nSince 1999"));
    }

    #[test]
    fn no_records_renders_header_only() {
        let doc = render_document("http://example.com", 0, &[]);
        assert_eq!(
            doc,
            "Scrape Base URL: http://example.com\nTotal Pages Scraped: 0\n"
        );
    }
}
