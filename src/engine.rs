//! Advisor engine
//!
//! Wires the shared pattern matcher, the weigher, the catalog store and the
//! least-privilege resolver behind one handle.
//!
//! ```text
//! RoleSource → annotate weights → CatalogStore ─┬→ ActionDirectory (once per version)
//!                                               └→ snapshot → LeastPrivilegeResolver → ranked roles
//! ```

use crate::catalog::{CatalogSnapshot, CatalogStore, RoleCatalog, RoleSource};
use crate::config::EngineConfig;
use crate::directory::{ActionDirectory, DirectoryBuilder};
use crate::error::Result;
use crate::pattern::{CacheStats, PatternMatcher};
use crate::resolver::{LeastPrivilegeResolver, LeastPrivilegeResult, ResolveRequest};
use crate::types::{ProviderOperation, Role};
use crate::weight::PrivilegeWeigher;
use std::sync::Arc;

/// Main advisor engine
///
/// # Example
///
/// ```rust
/// use rbac_advisor::{AdvisorEngine, PermissionSet, ResolveRequest, Role};
///
/// # fn main() -> rbac_advisor::Result<()> {
/// let engine = AdvisorEngine::new();
/// engine.load_roles(
///     vec![
///         Role::new("owner", "Owner").with_permission_set(PermissionSet::new().with_actions(["*"])),
///         Role::new("reader", "Reader").with_permission_set(PermissionSet::new().with_actions(["*/read"])),
///     ],
///     Vec::new(),
/// )?;
///
/// let snapshot = engine.snapshot();
/// let request = ResolveRequest::new(["Provider.Storage/accounts/read"]);
/// let ranked = engine.least_privileged(&snapshot, &request)?;
///
/// assert_eq!(ranked[0].role.name, "Reader");
/// # Ok(())
/// # }
/// ```
pub struct AdvisorEngine {
    config: EngineConfig,
    matcher: Arc<PatternMatcher>,
    resolver: LeastPrivilegeResolver,
    store: CatalogStore,
}

impl AdvisorEngine {
    /// Create an engine with the default configuration and an empty catalog
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with the given configuration and an empty catalog
    pub fn with_config(config: EngineConfig) -> Self {
        let matcher = Arc::new(PatternMatcher::with_config(config.matcher.clone()));
        let weigher = PrivilegeWeigher::with_config(config.weight.clone());
        let resolver = LeastPrivilegeResolver::with_weigher(Arc::clone(&matcher), weigher);
        let builder = DirectoryBuilder::with_config(Arc::clone(&matcher), config.directory.clone());

        tracing::info!(
            "AdvisorEngine initialized with pattern cache size {}",
            config.matcher.max_cache_size
        );

        Self {
            config,
            matcher,
            resolver,
            store: CatalogStore::new(builder),
        }
    }

    /// Annotate roles with their weights and swap them in as a new catalog
    pub fn load_roles(&self, mut roles: Vec<Role>, operations: Vec<ProviderOperation>) -> Result<u64> {
        self.resolver.weigher().annotate(&mut roles);
        let catalog = RoleCatalog::new(roles)?.with_operations(operations);
        Ok(self.store.replace(catalog))
    }

    /// Swap in a catalog exactly as given
    pub fn replace_catalog(&self, catalog: RoleCatalog) -> u64 {
        self.store.replace(catalog)
    }

    /// Pull roles and operations from a source and swap them in
    pub fn refresh_from(&self, source: &dyn RoleSource) -> Result<u64> {
        let roles = source.load()?;
        let operations = source.operations()?;
        self.load_roles(roles, operations)
    }

    /// The current catalog snapshot
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.store.snapshot()
    }

    /// Rank the roles of `snapshot` that satisfy `request`
    ///
    /// # Errors
    ///
    /// Returns `AdvisorError::EmptyRequest` if the request names nothing and
    /// `AdvisorError::BlankOperation` if any entry is blank.
    pub fn least_privileged<'a>(
        &self,
        snapshot: &'a CatalogSnapshot,
        request: &ResolveRequest,
    ) -> Result<Vec<LeastPrivilegeResult<'a>>> {
        request.validate()?;
        Ok(self.resolver.resolve_request(snapshot.roles(), request))
    }

    /// The action directory of the current catalog version
    pub fn directory(&self) -> Arc<ActionDirectory> {
        self.store.directory()
    }

    /// Compiled pattern cache statistics
    pub fn matcher_stats(&self) -> CacheStats {
        self.matcher.stats()
    }

    pub fn resolver(&self) -> &LeastPrivilegeResolver {
        &self.resolver
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for AdvisorEngine {
    fn default() -> Self {
        Self::new()
    }
}
