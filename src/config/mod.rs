//! Configuration loading and validation
//!
//! Configuration is optional: every field has a default matching the
//! original scraper's behavior, so the CLI works with no config file at all.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
pub use validation::validate;
