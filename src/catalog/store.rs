//! Frozen role catalogs and the store that swaps them

use super::source::RoleSource;
use crate::directory::{ActionDirectory, DirectoryBuilder};
use crate::error::{AdvisorError, Result};
use crate::types::{ProviderOperation, Role};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

/// An immutable, validated collection of roles
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Arc<[Role]>,
    operations: Arc<[ProviderOperation]>,
}

impl RoleCatalog {
    /// Build a catalog, rejecting empty or duplicate role ids
    pub fn new(roles: Vec<Role>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(roles.len());

        for role in &roles {
            if role.id.trim().is_empty() {
                return Err(AdvisorError::InvalidRole {
                    role: role.name.clone(),
                    reason: "role id cannot be empty".to_string(),
                });
            }
            if !seen.insert(role.id.as_str()) {
                return Err(AdvisorError::InvalidRole {
                    role: role.id.clone(),
                    reason: "duplicate role id".to_string(),
                });
            }
        }

        Ok(Self {
            roles: roles.into(),
            operations: Arc::from(Vec::new()),
        })
    }

    /// Decode and validate a JSON array of role definitions
    pub fn from_json(json: &str) -> Result<Self> {
        let roles: Vec<Role> = serde_json::from_str(json)?;
        Self::new(roles)
    }

    /// Attach a provider operation catalog for directory merging
    pub fn with_operations(mut self, operations: Vec<ProviderOperation>) -> Self {
        self.operations = operations.into();
        self
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Provider operations, or `None` when none were attached
    pub fn operations(&self) -> Option<&[ProviderOperation]> {
        if self.operations.is_empty() {
            None
        } else {
            Some(&self.operations[..])
        }
    }

    /// Look up a role by id
    pub fn get(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self {
            roles: Arc::from(Vec::new()),
            operations: Arc::from(Vec::new()),
        }
    }
}

/// One version of the catalog plus its lazily built directory
#[derive(Debug)]
pub struct CatalogSnapshot {
    version: u64,
    catalog: RoleCatalog,
    directory: OnceLock<Arc<ActionDirectory>>,
}

impl CatalogSnapshot {
    fn new(version: u64, catalog: RoleCatalog) -> Self {
        Self {
            version,
            catalog,
            directory: OnceLock::new(),
        }
    }

    /// Monotonic version, bumped on every swap
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn roles(&self) -> &[Role] {
        self.catalog.roles()
    }

    /// The directory for this version, building it on first use
    pub fn directory_with(&self, builder: &DirectoryBuilder) -> Arc<ActionDirectory> {
        let directory = self.directory.get_or_init(|| {
            tracing::debug!("Building action directory for catalog version {}", self.version);
            Arc::new(builder.build(self.catalog.roles(), self.catalog.operations()))
        });
        Arc::clone(directory)
    }

    /// True once the directory for this version has been built
    pub fn has_directory(&self) -> bool {
        self.directory.get().is_some()
    }
}

/// Holds the current catalog snapshot and swaps in replacements
///
/// # Thread Safety
///
/// The lock only guards the pointer swap. Readers clone the `Arc` and release
/// the lock immediately, so long resolutions never block a refresh.
pub struct CatalogStore {
    current: RwLock<Arc<CatalogSnapshot>>,
    builder: DirectoryBuilder,
}

impl CatalogStore {
    /// Create a store holding an empty catalog at version 0
    pub fn new(builder: DirectoryBuilder) -> Self {
        Self {
            current: RwLock::new(Arc::new(CatalogSnapshot::new(0, RoleCatalog::default()))),
            builder,
        }
    }

    /// The snapshot current at the time of the call
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Swap in a new catalog and return its version
    pub fn replace(&self, catalog: RoleCatalog) -> u64 {
        let mut current = self.current.write();
        let version = current.version + 1;
        let roles = catalog.len();

        *current = Arc::new(CatalogSnapshot::new(version, catalog));

        tracing::info!("Role catalog replaced: version {} with {} roles", version, roles);
        version
    }

    /// Load roles and operations from a source and swap them in
    pub fn refresh_from(&self, source: &dyn RoleSource) -> Result<u64> {
        let roles = source.load()?;
        let operations = source.operations()?;
        let catalog = RoleCatalog::new(roles)?.with_operations(operations);
        Ok(self.replace(catalog))
    }

    /// The action directory of the current snapshot
    pub fn directory(&self) -> Arc<ActionDirectory> {
        self.snapshot().directory_with(&self.builder)
    }

    /// Current catalog version
    pub fn version(&self) -> u64 {
        self.current.read().version
    }
}
