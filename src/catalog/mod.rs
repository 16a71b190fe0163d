//! Role catalogs and versioned snapshots
//!
//! A catalog is built once, frozen, and swapped in wholesale. Readers hold an
//! `Arc` to the snapshot they started with, so a refresh never disturbs a
//! resolution that is already running. Each snapshot builds its action
//! directory at most once.

mod source;
mod store;

pub use source::{JsonRoleSource, RoleSource, StaticRoleSource};
pub use store::{CatalogSnapshot, CatalogStore, RoleCatalog};
