//! HTTP fetcher implementation
//!
//! One GET per URL with a fixed timeout. There are no retries: a failed
//! attempt permanently abandons that URL for the run, and every failure mode
//! is a skip result the orchestrator recovers from, never a fatal error.

use crate::config::UserAgentConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
///
/// Only `Success` carries a body; every other variant means "skip this page
/// and continue with the next frontier entry".
#[derive(Debug)]
pub enum FetchResult {
    /// 2xx response with an HTML body
    Success {
        /// Page body content
        body: String,
        /// Content-Type header value
        content_type: String,
    },

    /// Non-2xx response
    HttpError {
        /// The HTTP status code
        status: u16,
    },

    /// 2xx response whose Content-Type is not text/html; the body is
    /// neither stored nor parsed for links
    NotHtml {
        /// The actual Content-Type received
        content_type: String,
    },

    /// Transport-level failure (DNS, connection refused, timeout)
    TransportError {
        /// Error description
        detail: String,
    },
}

/// Builds the HTTP client used for the whole crawl run
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Per-request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL with a GET request
///
/// # Outcome mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx + `text/html` Content-Type | `Success` |
/// | 2xx + any other Content-Type | `NotHtml` |
/// | Non-2xx status | `HttpError` |
/// | Timeout / DNS / connection failure | `TransportError` |
/// | Body read failure | `TransportError` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let detail = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                "connection failed".to_string()
            } else {
                e.to_string()
            };
            return FetchResult::TransportError { detail };
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchResult::HttpError {
            status: status.as_u16(),
        };
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("text/html") {
        return FetchResult::NotHtml { content_type };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success { body, content_type },
        Err(e) => FetchResult::TransportError {
            detail: e.to_string(),
        },
    }
}
