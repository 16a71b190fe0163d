//! Shared helpers for integration tests

#![allow(dead_code)]

use rbac_advisor::{PermissionSet, Role, RoleCatalog};
use tracing_subscriber::EnvFilter;

pub const ROLES_JSON: &str = include_str!("../fixtures/roles.json");

/// Install a test-writer subscriber once, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn fixture_catalog() -> RoleCatalog {
    RoleCatalog::from_json(ROLES_JSON).expect("fixture catalog decodes")
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn role_with_actions(id: &str, actions: &[&str]) -> Role {
    Role::new(id, id).with_permission_set(PermissionSet::new().with_actions(actions.iter().copied()))
}
