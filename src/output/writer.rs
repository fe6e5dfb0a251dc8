//! Knowledge-base file persistence

use crate::output::document::{render_document, PageRecord};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the knowledge-base document, overwriting any previous file
///
/// The parent directory is created if absent (idempotent: an existing
/// directory is not an error). Each run produces a fresh file; there are no
/// append semantics across runs.
///
/// # Arguments
///
/// * `path` - Destination file path
/// * `seed_url` - The seed URL the crawl started from
/// * `pages_visited` - Number of distinct URLs visited
/// * `records` - Page records in accumulation order
///
/// # Returns
///
/// * `Ok(())` - Document written
/// * `Err(std::io::Error)` - Directory creation or file write failed
pub fn write_knowledge_base(
    path: &Path,
    seed_url: &str,
    pages_visited: usize,
    records: &[PageRecord],
) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let document = render_document(seed_url, pages_visited, records);

    let mut file = File::create(path)?;
    file.write_all(document.as_bytes())?;

    Ok(())
}
