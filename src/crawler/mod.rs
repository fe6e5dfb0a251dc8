//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with skip-result error classification
//! - HTML text and link extraction
//! - The frontier (FIFO queue + visited set)
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;

pub use coordinator::{CrawlResult, Crawler};
pub use extractor::{extract_page, ExtractedPage};
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use frontier::Frontier;

use crate::config::Config;

/// Runs a complete scrape and flattens every fault into the result
///
/// This is the main entry point for callers that only care about the
/// `(success, message)` outcome: seed validation errors and I/O faults
/// become an unsuccessful [`CrawlResult`] instead of an `Err`. Use
/// [`Crawler::new`] and [`Crawler::run`] directly for typed errors.
///
/// # Arguments
///
/// * `seed_url` - The URL the crawl starts from
/// * `config` - The crawler configuration
pub async fn scrape(seed_url: &str, config: Config) -> CrawlResult {
    let crawler = match Crawler::new(seed_url, config) {
        Ok(crawler) => crawler,
        Err(e) => {
            tracing::error!("Failed to start scrape of {}: {}", seed_url, e);
            return CrawlResult::fault(e.to_string());
        }
    };

    match crawler.run().await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Scrape of {} aborted: {}", seed_url, e);
            CrawlResult::fault(e.to_string())
        }
    }
}
