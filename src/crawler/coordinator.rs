//! Crawler coordinator - main crawl orchestration logic
//!
//! The crawl loop is strictly sequential: one fetch in flight at a time,
//! with a mandatory politeness delay after every attempt. Per-page failures
//! (bad status, non-HTML, transport errors, malformed links) are recovered
//! here and logged; only an empty result set or an I/O fault while writing
//! the output can make the run unsuccessful.

use crate::config::{validate, Config};
use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::crawler::frontier::Frontier;
use crate::output::{write_knowledge_base, PageRecord};
use crate::{ScribeError, UrlError};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Terminal summary of a crawl run
///
/// Constructed once when the run ends and immutable afterwards. Callers see
/// nothing else: no partial or interim state is exposed.
#[derive(Debug, Clone)]
pub struct CrawlResult {
    /// Whether the run produced a knowledge-base file
    pub success: bool,

    /// Human-readable outcome description
    pub message: String,

    /// Number of distinct URLs visited
    pub pages_visited: usize,
}

impl CrawlResult {
    /// Builds the result for a run that failed before or during persistence
    pub(crate) fn fault(message: String) -> Self {
        Self {
            success: false,
            message,
            pages_visited: 0,
        }
    }
}

/// A single crawl invocation
///
/// Owns its frontier and accumulation buffer exclusively; both are discarded
/// when the run ends. Running two crawls against overlapping output paths is
/// unsupported (last writer wins).
pub struct Crawler {
    config: Config,
    client: Client,
    frontier: Frontier,
    seed_url: String,
    records: Vec<PageRecord>,
}

impl Crawler {
    /// Creates a crawler seeded with the given URL
    ///
    /// Validates the configuration and the seed (well-formed, http/https,
    /// has a host) and builds the HTTP client for the run.
    ///
    /// # Arguments
    ///
    /// * `seed_url` - The URL the crawl starts from
    /// * `config` - The crawler configuration
    pub fn new(seed_url: &str, config: Config) -> Result<Self, ScribeError> {
        validate(&config)?;

        let seed = Url::parse(seed_url)?;
        if seed.scheme() != "http" && seed.scheme() != "https" {
            return Err(UrlError::InvalidScheme(format!(
                "seed URL must be http or https, got: {}",
                seed.scheme()
            ))
            .into());
        }

        let frontier = Frontier::new(&seed)?;
        let client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.crawler.fetch_timeout_secs),
        )?;

        Ok(Self {
            config,
            client,
            frontier,
            seed_url: seed_url.to_string(),
            records: Vec::new(),
        })
    }

    /// Runs the crawl to completion and writes the knowledge-base file
    ///
    /// The loop ends when the page budget is reached or the frontier is
    /// exhausted. An `Err` is returned only for faults outside the per-page
    /// recovery path, such as failing to create the output directory.
    pub async fn run(mut self) -> Result<CrawlResult, ScribeError> {
        tracing::info!(
            "Starting scrape of {} (max pages: {})",
            self.seed_url,
            self.config.crawler.max_pages
        );

        let delay = Duration::from_millis(self.config.crawler.politeness_delay_ms);

        while self.frontier.visited_count() < self.config.crawler.max_pages {
            let url = match self.frontier.dequeue() {
                Some(url) => url,
                None => {
                    tracing::info!("Frontier exhausted");
                    break;
                }
            };

            self.frontier.mark_visited(&url);
            self.process_page(&url).await;

            // Applies after every attempt, successful or not
            tokio::time::sleep(delay).await;
        }

        let pages_visited = self.frontier.visited_count();

        if self.records.is_empty() {
            tracing::warn!("No page yielded extractable text");
            return Ok(CrawlResult {
                success: false,
                message: "No content found or scraping failed.".to_string(),
                pages_visited,
            });
        }

        let path = Path::new(&self.config.output.knowledge_base_path);
        write_knowledge_base(path, &self.seed_url, pages_visited, &self.records)?;

        let message = format!(
            "Successfully scraped {} pages to {}",
            pages_visited,
            path.display()
        );
        tracing::info!("{}", message);

        Ok(CrawlResult {
            success: true,
            message,
            pages_visited,
        })
    }

    /// Fetches one URL and folds the outcome into the run state
    ///
    /// Every failure mode is terminal for this URL but never for the run.
    async fn process_page(&mut self, url: &str) {
        tracing::info!("Scraping: {}", url);

        match fetch_page(&self.client, url).await {
            FetchResult::Success { body, .. } => {
                let base = match Url::parse(url) {
                    Ok(base) => base,
                    Err(e) => {
                        tracing::debug!("Skipping {}: unparseable base URL ({})", url, e);
                        return;
                    }
                };

                let page = extract_page(&body, &base);

                if page.text.is_empty() {
                    tracing::debug!("No extractable text on {}", url);
                } else {
                    self.records.push(PageRecord {
                        url: url.to_string(),
                        text: page.text,
                    });
                }

                let mut discovered = 0;
                for link in &page.links {
                    if self.frontier.enqueue(link) {
                        discovered += 1;
                    }
                }
                tracing::debug!(
                    "Queued {} new links from {} ({} waiting)",
                    discovered,
                    url,
                    self.frontier.queue_len()
                );
            }

            FetchResult::HttpError { status } => {
                tracing::info!("Skipping {}: status {}", url, status);
            }

            FetchResult::NotHtml { content_type } => {
                tracing::info!("Skipping {}: not HTML ({})", url, content_type);
            }

            FetchResult::TransportError { detail } => {
                tracing::info!("Skipping {}: {}", url, detail);
            }
        }
    }
}
