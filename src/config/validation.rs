//! Configuration validation
//!
//! All validation happens before any network activity; a config that passes
//! here is guaranteed to produce a plannable run.

use crate::config::types::Config;
use crate::links::MemberId;
use crate::ConfigError;

/// Validates a parsed configuration
///
/// Checks performed:
/// - the seed URL contains a derivable member id (`/<digits>/` segment)
/// - `pages` is at least 1 (a run over zero pages is a configuration
///   mistake, not an empty result)
/// - `max-connections` is at least 1
/// - `request-timeout-secs` is non-zero
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError)` - First validation failure encountered
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    // Fails fast on a seed URL the planner could never use
    MemberId::from_seed_url(&config.scraper.seed_url)?;

    if config.scraper.pages == 0 {
        return Err(ConfigError::Validation(
            "pages must be at least 1".to_string(),
        ));
    }

    if config.scraper.max_connections == 0 {
        return Err(ConfigError::Validation(
            "max-connections must be at least 1".to_string(),
        ));
    }

    if config.scraper.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be non-zero".to_string(),
        ));
    }

    Ok(())
}
