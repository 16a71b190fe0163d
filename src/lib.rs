//! # RBAC Advisor
//!
//! Least-privilege role resolution for cloud role definitions.
//!
//! ## Features
//!
//! - **Wildcard matching** of operation identifiers with a shared compiled-pattern cache
//! - **Privilege weighting** to rank roles from most to least restrictive
//! - **Action directory** mapping every known operation to its canonical casing
//!   and granting roles, merged with provider operation catalogs
//! - **Least-privilege resolution** honoring per-permission-set deny lists
//! - **Versioned catalog snapshots** swapped wholesale, safe to read concurrently
//!
//! ## Example
//!
//! ```rust
//! use rbac_advisor::{LeastPrivilegeResolver, PatternMatcher, PermissionSet, Role};
//! use std::sync::Arc;
//!
//! let roles = vec![
//!     Role::new("contributor", "Contributor").with_permission_set(
//!         PermissionSet::new()
//!             .with_actions(["*"])
//!             .with_not_actions(["Provider.Auth/*/Delete"]),
//!     ),
//!     Role::new("reader", "Reader").with_permission_set(PermissionSet::new().with_actions(["*/read"])),
//! ];
//!
//! let resolver = LeastPrivilegeResolver::new(Arc::new(PatternMatcher::new()));
//!
//! let ranked = resolver.resolve(&roles, &["Provider.Storage/accounts/read".to_string()], &[]);
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].role.name, "Reader");
//!
//! let ranked = resolver.resolve(&roles, &["Provider.Auth/roleAssignments/Delete".to_string()], &[]);
//! assert!(ranked.is_empty());
//! ```

pub mod catalog;
pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod resolver;
pub mod types;
pub mod weight;

// Re-export commonly used types
pub use catalog::{CatalogSnapshot, CatalogStore, JsonRoleSource, RoleCatalog, RoleSource, StaticRoleSource};
pub use config::EngineConfig;
pub use directory::{ActionDirectory, BuildProgress, DirectoryBuilder, DirectoryConfig, DirectoryEntry};
pub use engine::AdvisorEngine;
pub use error::{AdvisorError, Result};
pub use pattern::{CacheStats, MatcherConfig, PatternMatcher};
pub use resolver::{LeastPrivilegeResolver, LeastPrivilegeResult, ResolveRequest};
pub use types::{PermissionSet, ProviderOperation, Role, RoleId, RoleKind};
pub use weight::{PrivilegeWeigher, WeightConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
