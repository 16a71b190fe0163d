//! Privilege weight estimation
//!
//! Scores how broad a role is so that roles can be ranked from most to least
//! restrictive. The score is a ranking heuristic, not a count of operations:
//! - bare `*` adds a large fixed weight
//! - a partial wildcard adds `max(floor, base / segment_count)`
//! - a literal adds `1`
//! - every deny entry subtracts `0.5`
//!
//! The total is clamped at zero.

use crate::pattern::is_wildcard;
use crate::types::{PermissionSet, Role};

/// Weighting constants
///
/// The defaults are the values downstream rankings were tuned against.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightConfig {
    /// Weight of a bare `*` entry
    pub full_wildcard: f64,

    /// Numerator for partial wildcards, divided by the segment count
    pub partial_wildcard_base: f64,

    /// Minimum weight of a partial wildcard
    pub partial_wildcard_floor: f64,

    /// Weight of a literal operation
    pub literal: f64,

    /// Amount subtracted per deny entry
    pub deny: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            full_wildcard: 10_000.0,
            partial_wildcard_base: 1_000.0,
            partial_wildcard_floor: 100.0,
            literal: 1.0,
            deny: 0.5,
        }
    }
}

/// Computes privilege weights for roles
#[derive(Debug, Clone, Default)]
pub struct PrivilegeWeigher {
    config: WeightConfig,
}

impl PrivilegeWeigher {
    /// Create a weigher with the default constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a weigher with custom constants
    pub fn with_config(config: WeightConfig) -> Self {
        Self { config }
    }

    /// Breadth score of a role across all of its permission sets
    pub fn weight(&self, role: &Role) -> f64 {
        let total: f64 = role
            .permissions
            .iter()
            .map(|set| self.permission_set_weight(set))
            .sum();

        total.max(0.0)
    }

    /// The role's attached weight, or a freshly computed one
    pub fn weight_or_cached(&self, role: &Role) -> f64 {
        role.permission_count.unwrap_or_else(|| self.weight(role))
    }

    /// Attach a computed weight to every role
    pub fn annotate(&self, roles: &mut [Role]) {
        for role in roles.iter_mut() {
            role.permission_count = Some(self.weight(role));
        }
        tracing::debug!("Annotated {} roles with privilege weights", roles.len());
    }

    /// Unclamped contribution of a single permission set
    fn permission_set_weight(&self, set: &PermissionSet) -> f64 {
        let grants: f64 = set
            .actions
            .iter()
            .chain(set.data_actions.iter())
            .map(|entry| self.entry_weight(entry))
            .sum();

        let denials = (set.not_actions.len() + set.not_data_actions.len()) as f64 * self.config.deny;

        grants - denials
    }

    /// Weight of one allow-list entry
    fn entry_weight(&self, entry: &str) -> f64 {
        if entry == "*" {
            return self.config.full_wildcard;
        }

        if is_wildcard(entry) {
            let segments = entry.split('/').count() as f64;
            return (self.config.partial_wildcard_base / segments)
                .max(self.config.partial_wildcard_floor);
        }

        self.config.literal
    }

    /// Returns the weighting constants
    pub fn config(&self) -> &WeightConfig {
        &self.config
    }
}
