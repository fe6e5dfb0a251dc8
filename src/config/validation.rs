use crate::config::types::Config;
use crate::ConfigError;

/// Validates a configuration after parsing
///
/// # Rules
///
/// - `max-pages` must be at least 1 (a zero budget would never visit the seed)
/// - `fetch-timeout-secs` must be at least 1
/// - `knowledge-base-path` must not be empty
/// - user-agent name and version must not be empty
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.crawler.max_pages == 0 {
        return Err(ConfigError::Validation(
            "crawler.max-pages must be at least 1".to_string(),
        ));
    }

    if config.crawler.fetch_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "crawler.fetch-timeout-secs must be at least 1".to_string(),
        ));
    }

    if config.output.knowledge_base_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output.knowledge-base-path must not be empty".to_string(),
        ));
    }

    if config.user_agent.crawler_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent.crawler-name must not be empty".to_string(),
        ));
    }

    if config.user_agent.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent.crawler-version must not be empty".to_string(),
        ));
    }

    Ok(())
}
