//! URL handling: normalization and host extraction
//!
//! The deduplication key for the whole crawler is produced here, so the
//! normalization contract is deliberately narrow and documented in
//! [`normalize_url`].

mod domain;
mod normalize;

pub use domain::extract_host;
pub use normalize::normalize_url;
