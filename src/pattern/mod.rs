//! Wildcard matching for operation identifiers.
//!
//! This module decides whether a concrete operation such as
//! `Provider.Storage/accounts/read` is covered by a permission pattern:
//! - Matching is case-insensitive
//! - `*` alone matches every operation
//! - `*` anywhere else matches any substring, including the empty one
//! - Every other character is literal, so no pattern is ever invalid
//! - Compiled patterns are cached in a thread-safe `DashMap`

mod matcher;

pub use matcher::{is_wildcard, CacheStats, MatcherConfig, PatternMatcher};

#[cfg(test)]
mod tests;
