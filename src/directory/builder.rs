//! Action directory construction

use super::types::{ActionDirectory, BuildProgress, DirectoryConfig, DirectoryEntry};
use crate::pattern::{is_wildcard, PatternMatcher};
use crate::types::{ProviderOperation, Role};
use indexmap::{IndexMap, IndexSet};
use std::sync::Arc;

/// A wildcard allow entry together with the denials of its permission set
///
/// Roles are referenced by catalog position, so two roles sharing an id are
/// still counted separately.
#[derive(Debug, Clone, Copy)]
struct WildcardGrant<'a> {
    pattern: &'a str,
    role: usize,
    not_actions: &'a [String],
    not_data_actions: &'a [String],
}

/// Casing variants and granting roles seen for one lower-cased operation
#[derive(Debug, Default)]
struct OperationTally<'a> {
    casings: IndexMap<&'a str, usize>,
    roles: IndexSet<usize>,
}

impl<'a> OperationTally<'a> {
    /// Most frequent casing; the first one seen wins ties
    fn canonical(&self) -> &'a str {
        let mut best: Option<(&'a str, usize)> = None;
        for (&casing, &count) in &self.casings {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((casing, count)),
            }
        }
        best.map(|(casing, _)| casing).unwrap_or_default()
    }
}

/// Builds [`ActionDirectory`] values from a role catalog
///
/// Construction costs O(operations × wildcard grants) pattern checks, so the
/// result is meant to be cached per catalog version.
pub struct DirectoryBuilder {
    matcher: Arc<PatternMatcher>,
    config: DirectoryConfig,
}

impl DirectoryBuilder {
    /// Create a builder with the default configuration
    pub fn new(matcher: Arc<PatternMatcher>) -> Self {
        Self::with_config(matcher, DirectoryConfig::default())
    }

    /// Create a builder with a custom configuration
    pub fn with_config(matcher: Arc<PatternMatcher>, config: DirectoryConfig) -> Self {
        Self { matcher, config }
    }

    /// Build the directory, optionally merging a provider operation catalog
    pub fn build(&self, roles: &[Role], operations: Option<&[ProviderOperation]>) -> ActionDirectory {
        self.build_with_progress(roles, operations, |_| {})
    }

    /// Build the directory, reporting progress through `on_progress`
    ///
    /// # Pipeline
    ///
    /// 1. Tally every literal action and data action by lower-cased key
    /// 2. Collect every wildcard action and data action with its set's denials
    /// 3. Pick each key's canonical casing and add non-denied wildcard grants
    /// 4. Merge provider operations that are still missing, with no grants
    pub fn build_with_progress<F>(
        &self,
        roles: &[Role],
        operations: Option<&[ProviderOperation]>,
        mut on_progress: F,
    ) -> ActionDirectory
    where
        F: FnMut(BuildProgress),
    {
        let (tallies, grants) = Self::collect(roles);
        let total = tallies.len();

        tracing::info!(
            "Building action directory: {} roles, {} explicit operations, {} wildcard grants",
            roles.len(),
            total,
            grants.len()
        );

        let mut entries = IndexMap::with_capacity(total);
        let mut last_reported = None;

        for (index, (key, tally)) in tallies.into_iter().enumerate() {
            let canonical = tally.canonical();
            let mut granting = tally.roles;

            for grant in &grants {
                if granting.contains(&grant.role) {
                    continue;
                }
                if self.wildcard_grants(grant, canonical) {
                    granting.insert(grant.role);
                }
            }

            let role_ids = granting.into_iter().map(|position| roles[position].id.clone()).collect();
            entries.insert(key, DirectoryEntry::granted(canonical, role_ids));

            let processed = index + 1;
            if self.config.progress_interval > 0 && processed % self.config.progress_interval == 0 {
                tracing::info!("Action directory progress: {}/{}", processed, total);
                on_progress(BuildProgress { processed, total });
                last_reported = Some(processed);
            }
        }

        if last_reported != Some(total) {
            on_progress(BuildProgress {
                processed: total,
                total,
            });
        }

        let mut directory = ActionDirectory::from_entries(entries);

        if let Some(operations) = operations {
            let added = directory.merge_operations(operations);
            tracing::debug!(
                "Merged {} provider operations, {} not granted by any role",
                operations.len(),
                added
            );
        }

        tracing::info!("Action directory built with {} operations", directory.len());

        directory
    }

    /// Explicit and wildcard passes over the catalog
    fn collect(roles: &[Role]) -> (IndexMap<String, OperationTally<'_>>, Vec<WildcardGrant<'_>>) {
        let mut tallies: IndexMap<String, OperationTally<'_>> = IndexMap::new();
        let mut grants = Vec::new();

        for (index, role) in roles.iter().enumerate() {
            for set in &role.permissions {
                for entry in set.actions.iter().chain(set.data_actions.iter()) {
                    if entry.is_empty() {
                        continue;
                    }

                    if is_wildcard(entry) {
                        grants.push(WildcardGrant {
                            pattern: entry,
                            role: index,
                            not_actions: &set.not_actions,
                            not_data_actions: &set.not_data_actions,
                        });
                        continue;
                    }

                    let tally = tallies.entry(entry.to_lowercase()).or_default();
                    *tally.casings.entry(entry.as_str()).or_insert(0) += 1;
                    tally.roles.insert(index);
                }
            }
        }

        (tallies, grants)
    }

    /// True when the wildcard covers the operation and neither deny list does
    fn wildcard_grants(&self, grant: &WildcardGrant<'_>, operation: &str) -> bool {
        self.matcher.matches(grant.pattern, operation)
            && !self.matcher.matches_any(grant.not_actions, operation)
            && !self.matcher.matches_any(grant.not_data_actions, operation)
    }

    /// Returns the shared matcher
    pub fn matcher(&self) -> &Arc<PatternMatcher> {
        &self.matcher
    }
}
