//! Action directory module
//!
//! Scans a role catalog once and produces a canonical, deduplicated catalog of
//! every known operation: its most common casing and the roles that grant it,
//! either by listing it verbatim or through a wildcard that is not denied.
//!
//! # Features
//!
//! - **Canonical casing**: the casing seen most often across roles wins
//! - **Wildcard expansion**: wildcard grants are resolved against every explicit operation
//! - **Per-grant denials**: a deny entry only suppresses its own wildcard/role pairing
//! - **Provider merge**: operations no role grants are still listed, with a count of zero
//! - **Progress reporting**: a callback and a `tracing` event at a fixed cadence
//!
//! # Example
//!
//! ```rust
//! use rbac_advisor::directory::DirectoryBuilder;
//! use rbac_advisor::pattern::PatternMatcher;
//! use rbac_advisor::types::{PermissionSet, Role};
//! use std::sync::Arc;
//!
//! let roles = vec![
//!     Role::new("reader", "Reader")
//!         .with_permission_set(PermissionSet::new().with_actions(["*/read"])),
//!     Role::new("storage", "Storage Reader")
//!         .with_permission_set(PermissionSet::new().with_actions(["Provider.Storage/accounts/read"])),
//! ];
//!
//! let builder = DirectoryBuilder::new(Arc::new(PatternMatcher::new()));
//! let directory = builder.build(&roles, None);
//!
//! let entry = directory.get("provider.storage/accounts/read").unwrap();
//! assert_eq!(entry.canonical_name, "Provider.Storage/accounts/read");
//! assert_eq!(entry.role_count, 2);
//! ```

mod builder;
mod types;


pub use builder::DirectoryBuilder;
pub use types::{ActionDirectory, BuildProgress, DirectoryConfig, DirectoryEntry};
