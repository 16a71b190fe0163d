//! Least-privilege role resolution
//!
//! Given a requested set of actions and data actions, finds every role that
//! grants all of them and ranks those roles from least to most privileged.
//!
//! # Grant Semantics
//!
//! - Within one permission set, an operation is granted when an allow entry
//!   matches it and no entry of the same set's deny list does
//! - A role grants an operation when any of its permission sets does
//! - Actions are checked against `actions`/`notActions`, data actions against
//!   `dataActions`/`notDataActions`
//! - A role is returned only if it grants every requested operation
//!
//! # Example
//!
//! ```rust
//! use rbac_advisor::pattern::PatternMatcher;
//! use rbac_advisor::resolver::LeastPrivilegeResolver;
//! use rbac_advisor::types::{PermissionSet, Role};
//! use std::sync::Arc;
//!
//! let roles = vec![
//!     Role::new("owner", "Owner").with_permission_set(PermissionSet::new().with_actions(["*"])),
//!     Role::new("reader", "Reader").with_permission_set(PermissionSet::new().with_actions(["*/read"])),
//! ];
//!
//! let resolver = LeastPrivilegeResolver::new(Arc::new(PatternMatcher::new()));
//! let results = resolver.resolve(&roles, &["Provider.Storage/accounts/read".to_string()], &[]);
//!
//! assert_eq!(results[0].role.name, "Reader");
//! assert_eq!(results[1].role.name, "Owner");
//! ```

mod least_privilege;
mod types;


pub use least_privilege::LeastPrivilegeResolver;
pub use types::{LeastPrivilegeResult, ResolveRequest};
