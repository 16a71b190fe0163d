//! Unit tests for wildcard matching and the compiled-pattern cache

use super::{MatcherConfig, PatternMatcher};
use std::sync::Arc;
use std::thread;

// ============================================================================
// Matching Semantics
// ============================================================================

#[test]
fn test_empty_inputs_never_match() {
    let matcher = PatternMatcher::new();

    assert!(!matcher.matches("", "Provider.Storage/accounts/read"));
    assert!(!matcher.matches("*", ""));
    assert!(!matcher.matches("", ""));
}

#[test]
fn test_exact_match_is_case_insensitive() {
    let matcher = PatternMatcher::new();

    assert!(matcher.matches("Provider.Storage/accounts/read", "provider.storage/accounts/read"));
    assert!(matcher.matches("PROVIDER.STORAGE/ACCOUNTS/READ", "Provider.Storage/accounts/read"));
    assert!(!matcher.matches("Provider.Storage/accounts/read", "Provider.Storage/accounts/write"));
}

#[test]
fn test_full_wildcard() {
    let matcher = PatternMatcher::new();

    assert!(matcher.matches("*", "Provider.Storage/accounts/read"));
    assert!(matcher.matches("*", "x"));
}

#[test]
fn test_suffix_and_prefix_wildcards() {
    let matcher = PatternMatcher::new();

    assert!(matcher.matches("*/read", "Provider.Storage/accounts/read"));
    assert!(!matcher.matches("*/read", "Provider.Storage/accounts/write"));
    assert!(matcher.matches("Provider.Storage/*", "Provider.Storage/accounts/listKeys/action"));
    assert!(!matcher.matches("Provider.Storage/*", "Provider.Compute/disks/read"));
}

#[test]
fn test_mid_token_wildcard() {
    let matcher = PatternMatcher::new();

    assert!(matcher.matches("Provider.Storage/storageAccounts/*Services/read", "Provider.Storage/storageAccounts/blobServices/read"));
    assert!(matcher.matches("Provider.Sto*/accounts/read", "Provider.Storage/accounts/read"));
    assert!(!matcher.matches("Provider.Sto*/accounts/read", "Provider.Compute/accounts/read"));
}

#[test]
fn test_wildcard_matches_empty_substring() {
    let matcher = PatternMatcher::new();

    assert!(matcher.matches("Provider.Storage/*accounts/read", "Provider.Storage/accounts/read"));
}

#[test]
fn test_wildcard_spans_segments() {
    let matcher = PatternMatcher::new();

    // `*` is not segment-aligned
    assert!(matcher.matches("Provider.Auth/*/Delete", "Provider.Auth/roleAssignments/nested/Delete"));
}

#[test]
fn test_no_partial_match_without_wildcard_cover() {
    let matcher = PatternMatcher::new();

    assert!(!matcher.matches("Provider.Storage/*/read", "Provider.Storage/accounts/readWrite"));
    assert!(!matcher.matches("*/read", "Provider.Storage/accounts/read/extra"));
    assert!(!matcher.matches("Provider.Storage/accounts", "Provider.Storage/accounts/read"));
}

#[test]
fn test_regex_metacharacters_are_literal() {
    let matcher = PatternMatcher::new();

    // `.` must not match an arbitrary character
    assert!(!matcher.matches("Provider.Storage/*", "ProviderXStorage/accounts/read"));
    assert!(matcher.matches("a(b)+/*", "A(B)+/anything"));
    assert!(!matcher.matches("a(b)+/*", "abb/anything"));
    assert!(matcher.matches("[x]/*?", "[X]/y?"));
}

#[test]
fn test_matches_any() {
    let matcher = PatternMatcher::new();
    let patterns = vec!["Provider.Compute/*".to_string(), "*/read".to_string()];

    assert!(matcher.matches_any(&patterns, "Provider.Storage/accounts/read"));
    assert!(matcher.matches_any(&patterns, "Provider.Compute/disks/write"));
    assert!(!matcher.matches_any(&patterns, "Provider.Storage/accounts/write"));

    let empty: Vec<String> = Vec::new();
    assert!(!matcher.matches_any(&empty, "Provider.Storage/accounts/read"));
}

// ============================================================================
// Cache Behaviour
// ============================================================================

#[test]
fn test_compiled_patterns_are_reused() {
    let matcher = PatternMatcher::new();

    assert!(matcher.matches("*/read", "a/read"));
    assert!(matcher.matches("*/READ", "b/read"));
    assert!(!matcher.matches("*/read", "c/write"));

    let stats = matcher.stats();
    assert_eq!(stats.size, 1);
    assert_eq!(stats.miss_count, 1);
    assert_eq!(stats.hit_count, 2);
    assert!(stats.hit_rate > 0.6);
}

#[test]
fn test_literals_and_full_wildcard_skip_cache() {
    let matcher = PatternMatcher::new();

    matcher.matches("*", "a/read");
    matcher.matches("a/read", "a/read");
    matcher.matches("a/read", "a/write");

    let stats = matcher.stats();
    assert_eq!(stats.size, 0);
    assert_eq!(stats.hit_count + stats.miss_count, 0);
}

#[test]
fn test_cache_is_bounded() {
    let matcher = PatternMatcher::with_config(MatcherConfig { max_cache_size: 2 });

    matcher.matches("a/*", "a/x");
    matcher.matches("b/*", "b/x");
    matcher.matches("c/*", "c/x");

    assert!(matcher.stats().size <= 2);
    // Evicted patterns still evaluate correctly
    assert!(matcher.matches("a/*", "a/y"));
}

#[test]
fn test_clear_cache() {
    let matcher = PatternMatcher::new();

    matcher.matches("a/*", "a/x");
    matcher.matches("a/*", "a/y");
    matcher.clear_cache();

    let stats = matcher.stats();
    assert_eq!(stats.size, 0);
    assert_eq!(stats.hit_count, 0);
    assert_eq!(stats.miss_count, 0);
    assert_eq!(stats.hit_rate, 0.0);
}

#[test]
fn test_concurrent_matching() {
    let matcher = Arc::new(PatternMatcher::new());
    let mut handles = vec![];

    for i in 0..8 {
        let matcher = Arc::clone(&matcher);
        handles.push(thread::spawn(move || {
            let operation = format!("Provider.Svc{}/things/read", i);
            matcher.matches("*/read", &operation) && !matcher.matches("*/write", &operation)
        }));
    }

    for handle in handles {
        assert!(handle.join().unwrap());
    }

    let stats = matcher.stats();
    assert_eq!(stats.hit_count + stats.miss_count, 16);
    assert_eq!(stats.size, 2);
}
