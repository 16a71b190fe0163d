//! Advisor configuration
//!
//! Environment variables:
//! - `RBAC_ADVISOR_PATTERN_CACHE_SIZE` - compiled pattern cache capacity (default: 10000)
//! - `RBAC_ADVISOR_PROGRESS_INTERVAL` - directory progress cadence, 0 disables (default: 1000)

use crate::directory::DirectoryConfig;
use crate::error::{AdvisorError, Result};
use crate::pattern::MatcherConfig;
use crate::weight::WeightConfig;

/// Environment variable for the pattern cache capacity
pub const PATTERN_CACHE_SIZE_ENV: &str = "RBAC_ADVISOR_PATTERN_CACHE_SIZE";

/// Environment variable for the directory progress cadence
pub const PROGRESS_INTERVAL_ENV: &str = "RBAC_ADVISOR_PROGRESS_INTERVAL";

/// Configuration for every advisor component
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Wildcard matcher settings
    pub matcher: MatcherConfig,

    /// Privilege weighting constants
    pub weight: WeightConfig,

    /// Directory construction settings
    pub directory: DirectoryConfig,
}

impl EngineConfig {
    /// Defaults overridden by process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(PATTERN_CACHE_SIZE_ENV) {
            config.matcher.max_cache_size = parse_usize(PATTERN_CACHE_SIZE_ENV, &value)?;
            if config.matcher.max_cache_size == 0 {
                return Err(AdvisorError::InvalidConfig {
                    key: PATTERN_CACHE_SIZE_ENV.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        if let Some(value) = lookup(PROGRESS_INTERVAL_ENV) {
            config.directory.progress_interval = parse_usize(PROGRESS_INTERVAL_ENV, &value)?;
        }

        tracing::debug!("Loaded engine configuration: {:?}", config);
        Ok(config)
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| AdvisorError::InvalidConfig {
            key: key.to_string(),
            reason: format!("'{}' is not a non-negative integer: {}", value, e),
        })
}
