//! Pattern matcher with a compiled-regex cache

use dashmap::DashMap;
use regex::Regex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Configuration for the pattern matcher
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Maximum number of compiled patterns kept in the cache
    pub max_cache_size: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_cache_size: 10_000,
        }
    }
}

/// Cache statistics for monitoring performance
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub size: usize,
    pub hit_count: u64,
    pub miss_count: u64,
    pub hit_rate: f64,
}

/// Returns true when an allow/deny entry is a wildcard pattern
pub fn is_wildcard(entry: &str) -> bool {
    entry.contains('*')
}

/// Matches operation identifiers against wildcard patterns
///
/// # Thread Safety
///
/// The compiled-pattern cache is a `DashMap`, so one matcher can be wrapped in
/// an `Arc` and shared by every directory build and resolution call.
///
/// # Examples
///
/// ```
/// use rbac_advisor::pattern::PatternMatcher;
///
/// let matcher = PatternMatcher::new();
///
/// assert!(matcher.matches("*", "Provider.Storage/accounts/read"));
/// assert!(matcher.matches("*/read", "Provider.Storage/accounts/read"));
/// assert!(matcher.matches("provider.storage/*", "Provider.Storage/accounts/write"));
/// assert!(!matcher.matches("Provider.Storage/*/delete", "Provider.Storage/accounts/read"));
/// ```
pub struct PatternMatcher {
    config: MatcherConfig,
    cache: DashMap<String, Arc<Regex>>,
    hit_count: AtomicU64,
    miss_count: AtomicU64,
}

impl PatternMatcher {
    /// Creates a matcher with the default configuration
    pub fn new() -> Self {
        Self::with_config(MatcherConfig::default())
    }

    /// Creates a matcher with the given configuration
    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            config,
            cache: DashMap::new(),
            hit_count: AtomicU64::new(0),
            miss_count: AtomicU64::new(0),
        }
    }

    /// Checks whether `operation` is covered by `pattern`
    ///
    /// Both sides are lower-cased first. An empty pattern or operation never
    /// matches; identical strings and the bare `*` always do. Otherwise each `*`
    /// stands for any substring and the whole operation must be consumed.
    pub fn matches(&self, pattern: &str, operation: &str) -> bool {
        if pattern.is_empty() || operation.is_empty() {
            return false;
        }

        let pattern = pattern.to_lowercase();
        let operation = operation.to_lowercase();

        if pattern == operation || pattern == "*" {
            return true;
        }

        // A literal that is not equal cannot match
        if !is_wildcard(&pattern) {
            return false;
        }

        match self.compiled(&pattern) {
            Some(regex) => regex.is_match(&operation),
            None => false,
        }
    }

    /// Checks whether any pattern in `patterns` covers `operation`
    pub fn matches_any<S: AsRef<str>>(&self, patterns: &[S], operation: &str) -> bool {
        patterns
            .iter()
            .any(|pattern| self.matches(pattern.as_ref(), operation))
    }

    /// Returns the cached regex for a lower-cased wildcard pattern, compiling on miss
    fn compiled(&self, pattern: &str) -> Option<Arc<Regex>> {
        if let Some(regex) = self.cache.get(pattern) {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
            return Some(Arc::clone(regex.value()));
        }

        self.miss_count.fetch_add(1, Ordering::Relaxed);

        let regex = match Regex::new(&Self::pattern_to_regex(pattern)) {
            Ok(regex) => Arc::new(regex),
            Err(err) => {
                tracing::warn!("Pattern '{}' failed to compile: {}", pattern, err);
                return None;
            }
        };

        if self.cache.len() >= self.config.max_cache_size {
            tracing::debug!(
                "Pattern cache reached {} entries, clearing",
                self.config.max_cache_size
            );
            self.cache.clear();
        }

        self.cache.insert(pattern.to_string(), Arc::clone(&regex));
        Some(regex)
    }

    /// Converts a wildcard pattern to an anchored regex
    ///
    /// Literal runs are escaped; each `*` becomes `.*`.
    fn pattern_to_regex(pattern: &str) -> String {
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        format!("^{}$", body)
    }

    /// Clears the compiled-pattern cache and resets statistics
    pub fn clear_cache(&self) {
        self.cache.clear();
        self.hit_count.store(0, Ordering::Relaxed);
        self.miss_count.store(0, Ordering::Relaxed);
    }

    /// Returns cache statistics
    pub fn stats(&self) -> CacheStats {
        let size = self.cache.len();
        let hits = self.hit_count.load(Ordering::Relaxed);
        let misses = self.miss_count.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        CacheStats {
            size,
            hit_count: hits,
            miss_count: misses,
            hit_rate,
        }
    }

    /// Returns the matcher configuration
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_to_regex_escapes_literals() {
        assert_eq!(
            PatternMatcher::pattern_to_regex("provider.storage/*"),
            r"^provider\.storage/.*$"
        );
        assert_eq!(PatternMatcher::pattern_to_regex("a*b*c"), "^a.*b.*c$");
        assert_eq!(PatternMatcher::pattern_to_regex("(x)+*"), r"^\(x\)\+.*$");
    }

    #[test]
    fn test_is_wildcard() {
        assert!(is_wildcard("*"));
        assert!(is_wildcard("Provider.Storage/*/read"));
        assert!(!is_wildcard("Provider.Storage/accounts/read"));
    }
}
