//! Least-privilege resolver

use super::types::{LeastPrivilegeResult, ResolveRequest};
use crate::pattern::PatternMatcher;
use crate::types::{PermissionSet, Role};
use crate::weight::PrivilegeWeigher;
use std::sync::Arc;

/// Which allow/deny pair of a permission set an operation is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plane {
    Control,
    Data,
}

impl Plane {
    fn lists(self, set: &PermissionSet) -> (&[String], &[String]) {
        match self {
            Plane::Control => (set.actions.as_slice(), set.not_actions.as_slice()),
            Plane::Data => (set.data_actions.as_slice(), set.not_data_actions.as_slice()),
        }
    }
}

/// Ranks roles that satisfy a requested set of operations
///
/// The resolver only reads the roles it is given. It holds no per-call state,
/// so one instance can serve concurrent requests against the same snapshot.
#[derive(Clone)]
pub struct LeastPrivilegeResolver {
    matcher: Arc<PatternMatcher>,
    weigher: PrivilegeWeigher,
}

impl LeastPrivilegeResolver {
    /// Create a resolver with the default weighting constants
    pub fn new(matcher: Arc<PatternMatcher>) -> Self {
        Self::with_weigher(matcher, PrivilegeWeigher::new())
    }

    /// Create a resolver with a custom weigher
    pub fn with_weigher(matcher: Arc<PatternMatcher>, weigher: PrivilegeWeigher) -> Self {
        Self { matcher, weigher }
    }

    /// Find the roles granting every requested operation, least privileged first
    ///
    /// Exact matches sort before everything else; within each group roles are
    /// ordered by ascending weight, and equal weights keep catalog order.
    pub fn resolve<'a>(
        &self,
        roles: &'a [Role],
        required_actions: &[String],
        required_data_actions: &[String],
    ) -> Vec<LeastPrivilegeResult<'a>> {
        let mut results: Vec<LeastPrivilegeResult<'a>> = roles
            .iter()
            .filter_map(|role| self.evaluate(role, required_actions, required_data_actions))
            .collect();

        results.sort_by(|a, b| {
            b.is_exact_match
                .cmp(&a.is_exact_match)
                .then_with(|| a.permission_count.total_cmp(&b.permission_count))
        });

        tracing::debug!(
            "Resolved {} of {} roles for {} actions and {} data actions",
            results.len(),
            roles.len(),
            required_actions.len(),
            required_data_actions.len()
        );

        results
    }

    /// [`resolve`](Self::resolve) for a [`ResolveRequest`]
    pub fn resolve_request<'a>(
        &self,
        roles: &'a [Role],
        request: &ResolveRequest,
    ) -> Vec<LeastPrivilegeResult<'a>> {
        self.resolve(roles, &request.actions, &request.data_actions)
    }

    /// True when some permission set of the role grants the action net of its denials
    pub fn grants_action(&self, role: &Role, action: &str) -> bool {
        self.grants(role, action, Plane::Control)
    }

    /// True when some permission set of the role grants the data action net of its denials
    pub fn grants_data_action(&self, role: &Role, data_action: &str) -> bool {
        self.grants(role, data_action, Plane::Data)
    }

    fn grants(&self, role: &Role, operation: &str, plane: Plane) -> bool {
        role.permissions.iter().any(|set| {
            let (allow, deny) = plane.lists(set);
            self.matcher.matches_any(allow, operation) && !self.matcher.matches_any(deny, operation)
        })
    }

    /// Result for one role, or `None` if any requested operation is missing
    fn evaluate<'a>(
        &self,
        role: &'a Role,
        required_actions: &[String],
        required_data_actions: &[String],
    ) -> Option<LeastPrivilegeResult<'a>> {
        let matching_actions = self.all_granted(role, required_actions, Plane::Control)?;
        let matching_data_actions = self.all_granted(role, required_data_actions, Plane::Data)?;

        let permission_count = self.weigher.weight_or_cached(role);
        let requested = (required_actions.len() + required_data_actions.len()) as f64;

        let is_exact_match = matching_actions.len() == required_actions.len()
            && matching_data_actions.len() == required_data_actions.len()
            && permission_count == requested;

        Some(LeastPrivilegeResult {
            role,
            matching_actions,
            matching_data_actions,
            permission_count,
            is_exact_match,
        })
    }

    /// The requested operations in order, or `None` on the first one not granted
    fn all_granted(&self, role: &Role, required: &[String], plane: Plane) -> Option<Vec<String>> {
        let mut matched = Vec::with_capacity(required.len());
        for operation in required {
            if !self.grants(role, operation, plane) {
                return None;
            }
            matched.push(operation.clone());
        }
        Some(matched)
    }

    /// Returns the weigher used for ranking
    pub fn weigher(&self) -> &PrivilegeWeigher {
        &self.weigher
    }
}
