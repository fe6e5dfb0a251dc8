//! Knowledge-base document rendering and persistence
//!
//! The only contract toward downstream consumers is "valid UTF-8 text at the
//! given path in the banner format": a two-line header followed by one
//! banner-delimited section per scraped page.

mod document;
mod writer;

pub use document::{render_document, PageRecord};
pub use writer::write_knowledge_base;
