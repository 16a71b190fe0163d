//! Role catalog sources

use crate::error::Result;
use crate::types::{ProviderOperation, Role};

/// Supplies role definitions to a [`CatalogStore`](super::CatalogStore)
///
/// Implementations own acquisition (embedded fixtures, files, remote APIs);
/// the advisor only sees the materialized roles.
pub trait RoleSource: Send + Sync {
    /// Load the full set of role definitions
    fn load(&self) -> Result<Vec<Role>>;

    /// Load the provider operation catalog, if the source has one
    fn operations(&self) -> Result<Vec<ProviderOperation>> {
        Ok(Vec::new())
    }
}

/// In-memory role source
#[derive(Debug, Clone, Default)]
pub struct StaticRoleSource {
    roles: Vec<Role>,
    operations: Vec<ProviderOperation>,
}

impl StaticRoleSource {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles,
            operations: Vec::new(),
        }
    }

    /// Attach a provider operation catalog
    pub fn with_operations(mut self, operations: Vec<ProviderOperation>) -> Self {
        self.operations = operations;
        self
    }
}

impl RoleSource for StaticRoleSource {
    fn load(&self) -> Result<Vec<Role>> {
        Ok(self.roles.clone())
    }

    fn operations(&self) -> Result<Vec<ProviderOperation>> {
        Ok(self.operations.clone())
    }
}

/// Role source decoding JSON documents held in memory
///
/// `roles` is a JSON array of role definitions; `operations`, when present, is
/// a JSON array of `{ "name", "provider" }` records.
#[derive(Debug, Clone)]
pub struct JsonRoleSource {
    roles: String,
    operations: Option<String>,
}

impl JsonRoleSource {
    pub fn new(roles: impl Into<String>) -> Self {
        Self {
            roles: roles.into(),
            operations: None,
        }
    }

    /// Attach a provider operation catalog document
    pub fn with_operations(mut self, operations: impl Into<String>) -> Self {
        self.operations = Some(operations.into());
        self
    }
}

impl RoleSource for JsonRoleSource {
    fn load(&self) -> Result<Vec<Role>> {
        Ok(serde_json::from_str(&self.roles)?)
    }

    fn operations(&self) -> Result<Vec<ProviderOperation>> {
        match &self.operations {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;

    #[test]
    fn test_json_source() {
        let source = JsonRoleSource::new(
            r#"[{ "id": "r1", "roleName": "Reader", "permissions": [{ "actions": ["*/read"] }] }]"#,
        )
        .with_operations(r#"[{ "name": "Provider.Storage/accounts/read", "provider": "Provider.Storage" }]"#);

        let roles = source.load().unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].name, "Reader");

        let operations = source.operations().unwrap();
        assert_eq!(operations[0].provider, "Provider.Storage");
    }

    #[test]
    fn test_json_source_parse_error() {
        let source = JsonRoleSource::new("{ not json");
        assert!(matches!(source.load(), Err(AdvisorError::CatalogParse(_))));
    }

    struct Unreachable;

    impl RoleSource for Unreachable {
        fn load(&self) -> Result<Vec<Role>> {
            Err(AdvisorError::Source("role endpoint unreachable".to_string()))
        }
    }

    #[test]
    fn test_failing_source_leaves_store_untouched() {
        use crate::catalog::CatalogStore;
        use crate::directory::DirectoryBuilder;
        use crate::pattern::PatternMatcher;
        use std::sync::Arc;

        let store = CatalogStore::new(DirectoryBuilder::new(Arc::new(PatternMatcher::new())));

        assert!(matches!(store.refresh_from(&Unreachable), Err(AdvisorError::Source(_))));
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_static_source_without_operations() {
        let source = StaticRoleSource::new(vec![Role::new("r1", "Reader")]);
        assert_eq!(source.load().unwrap().len(), 1);
        assert!(source.operations().unwrap().is_empty());
    }
}
