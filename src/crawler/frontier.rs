//! Frontier: the breadth-first traversal state
//!
//! A FIFO queue of URLs still to visit plus the set of already-visited
//! normalized URLs. One frontier is owned exclusively by one crawl
//! invocation; nothing here is shared or global.

use crate::url::{extract_host, normalize_url};
use crate::UrlError;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Traversal state for a single crawl run
#[derive(Debug)]
pub struct Frontier {
    /// Host of the seed URL; only links on this exact host are enqueued
    origin_host: String,

    /// URLs discovered but not yet processed, in discovery order
    queue: VecDeque<String>,

    /// Normalized URLs already handed out for processing; grows monotonically
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier seeded with the given URL
    ///
    /// The seed's host becomes the origin host for the same-domain filter.
    pub fn new(seed: &Url) -> Result<Self, UrlError> {
        let origin_host = extract_host(seed).ok_or(UrlError::MissingHost)?;

        let mut queue = VecDeque::new();
        queue.push_back(normalize_url(seed.as_str()));

        Ok(Self {
            origin_host,
            queue,
            visited: HashSet::new(),
        })
    }

    /// Adds a discovered URL to the queue
    ///
    /// The URL is enqueued only if all of the following hold:
    /// - its host is exactly the origin host (subdomains do not match)
    /// - its normalized form has not been visited
    /// - its normalized form is not already queued
    ///
    /// Returns whether the URL was actually enqueued.
    pub fn enqueue(&mut self, url: &Url) -> bool {
        match extract_host(url) {
            Some(host) if host == self.origin_host => {}
            _ => return false,
        }

        let normalized = normalize_url(url.as_str());
        if self.visited.contains(&normalized) || self.queue.contains(&normalized) {
            return false;
        }

        self.queue.push_back(normalized);
        true
    }

    /// Returns the oldest queued URL that has not been visited yet
    ///
    /// Entries that became visited while queued are discarded on the way,
    /// so a returned URL is always safe to process.
    pub fn dequeue(&mut self) -> Option<String> {
        while let Some(url) = self.queue.pop_front() {
            if !self.visited.contains(&url) {
                return Some(url);
            }
        }
        None
    }

    /// Records a URL as visited; idempotent
    pub fn mark_visited(&mut self, url: &str) {
        self.visited.insert(normalize_url(url));
    }

    /// Number of distinct URLs visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs waiting in the queue
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}
