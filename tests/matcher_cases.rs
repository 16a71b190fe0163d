//! Table-driven wildcard matching cases

use rbac_advisor::PatternMatcher;
use test_case::test_case;

#[test_case("*", "Provider.Storage/accounts/read", true ; "bare star")]
#[test_case("*/read", "Provider.Storage/accounts/read", true ; "suffix wildcard")]
#[test_case("*/read", "Provider.Storage/accounts/write", false ; "suffix mismatch")]
#[test_case("Provider.Storage/*", "provider.storage/accounts/delete", true ; "prefix wildcard any case")]
#[test_case("Provider.Storage/*/read", "Provider.Storage/accounts/keys/read", true ; "star spans segments")]
#[test_case("Provider.Auth/*/Delete", "Provider.Auth/roleAssignments/delete", true ; "inner wildcard any case")]
#[test_case("Provider.Storage/accounts/read", "PROVIDER.STORAGE/ACCOUNTS/READ", true ; "literal any case")]
#[test_case("Provider.Storage/accounts/read", "Provider.Storage/accounts/readx", false ; "literal is anchored")]
#[test_case("Provider.Storage/*", "Provider.Network/vnets/read", false ; "other provider")]
#[test_case("Provider.Stor?ge/*", "Provider.Storage/accounts/read", false ; "question mark is literal")]
#[test_case("Provider.Storage/accounts/read", "Providerx Storage/accounts/read", false ; "dot is literal")]
#[test_case("a*b*c", "aXXbYYc", true ; "multiple stars")]
#[test_case("a*b*c", "aXXcYYb", false ; "multiple stars out of order")]
#[test_case("**", "", false ; "empty operation")]
#[test_case("", "Provider.Storage/accounts/read", false ; "empty pattern")]
fn test_pattern_matching(pattern: &str, operation: &str, expected: bool) {
    let matcher = PatternMatcher::new();
    assert_eq!(matcher.matches(pattern, operation), expected);

    // Cached path agrees with the cold one
    assert_eq!(matcher.matches(pattern, operation), expected);
}

#[test_case(&["x/read", "*/write"], "y/write", true ; "second pattern matches")]
#[test_case(&["x/read", "x/write"], "y/write", false ; "none match")]
#[test_case(&[], "y/write", false ; "empty list")]
fn test_matches_any(patterns: &[&str], operation: &str, expected: bool) {
    let matcher = PatternMatcher::new();
    assert_eq!(matcher.matches_any(patterns, operation), expected);
}
