//! Action directory types and queries

use crate::error::Result;
use crate::types::{ProviderOperation, RoleId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration for directory construction
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Report progress every this many processed operations (0 disables)
    pub progress_interval: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            progress_interval: 1_000,
        }
    }
}

/// Progress notification emitted while resolving wildcard grants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildProgress {
    /// Operations resolved so far
    pub processed: usize,
    /// Operations to resolve in total
    pub total: usize,
}

/// One operation in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    /// Display casing, the variant seen most often
    pub canonical_name: String,

    /// Number of roles that effectively grant the operation
    pub role_count: usize,

    /// Sorted ids of the granting roles, one per role
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleId>,
}

impl DirectoryEntry {
    /// Entry for an operation no known role grants
    pub fn ungranted(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            role_count: 0,
            roles: Vec::new(),
        }
    }

    /// Entry granted by the given roles, one id per granting role
    pub fn granted(canonical_name: impl Into<String>, mut roles: Vec<RoleId>) -> Self {
        roles.sort();
        Self {
            canonical_name: canonical_name.into(),
            role_count: roles.len(),
            roles,
        }
    }
}

/// Canonical catalog of operations, keyed by lower-cased name
///
/// Built once per role-catalog version and read many times. Keys are kept in
/// sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionDirectory {
    entries: IndexMap<String, DirectoryEntry>,
}

impl ActionDirectory {
    pub(crate) fn from_entries(mut entries: IndexMap<String, DirectoryEntry>) -> Self {
        entries.sort_keys();
        Self { entries }
    }

    /// Look up an operation, case-insensitively
    pub fn get(&self, operation: &str) -> Option<&DirectoryEntry> {
        self.entries.get(&operation.to_lowercase())
    }

    /// True when the operation is known
    pub fn contains(&self, operation: &str) -> bool {
        self.get(operation).is_some()
    }

    /// Number of known operations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(lower-cased key, entry)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectoryEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Operations that no known role grants
    pub fn uncovered(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.values().filter(|entry| entry.role_count == 0)
    }

    /// Case-insensitive substring search for autocomplete
    ///
    /// Results are ranked by role count (most granted first), then by name.
    /// An empty query matches everything.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&DirectoryEntry> {
        let query = query.to_lowercase();

        let mut hits: Vec<(&String, &DirectoryEntry)> = self
            .entries
            .iter()
            .filter(|(key, _)| key.contains(&query))
            .collect();

        hits.sort_by(|(a_key, a), (b_key, b)| {
            b.role_count
                .cmp(&a.role_count)
                .then_with(|| a_key.cmp(b_key))
        });

        hits.into_iter()
            .take(limit)
            .map(|(_, entry)| entry)
            .collect()
    }

    /// Add provider operations not already present, with a role count of zero
    ///
    /// Existing entries are never touched. Returns how many entries were added.
    pub fn merge_operations(&mut self, operations: &[ProviderOperation]) -> usize {
        let mut added = 0;

        for operation in operations {
            if operation.name.is_empty() {
                continue;
            }

            let key = operation.name.to_lowercase();
            if self.entries.contains_key(&key) {
                continue;
            }

            self.entries
                .insert(key, DirectoryEntry::ungranted(operation.name.clone()));
            added += 1;
        }

        if added > 0 {
            self.entries.sort_keys();
        }

        added
    }

    /// Serialize the directory for external caching
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a directory previously produced by [`to_json`](Self::to_json)
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: IndexMap<String, DirectoryEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }
}
