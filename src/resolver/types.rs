//! Resolution request and result types

use crate::error::{AdvisorError, Result};
use crate::types::Role;
use serde::{Deserialize, Serialize};

/// A set of operations a caller needs granted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    /// Required control-plane actions
    #[serde(default)]
    pub actions: Vec<String>,

    /// Required data-plane actions
    #[serde(default)]
    pub data_actions: Vec<String>,
}

impl ResolveRequest {
    /// Create a request for the given actions
    pub fn new<I, S>(actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            actions: actions.into_iter().map(Into::into).collect(),
            data_actions: Vec::new(),
        }
    }

    /// Add required data actions
    pub fn with_data_actions<I, S>(mut self, data_actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_actions = data_actions.into_iter().map(Into::into).collect();
        self
    }

    /// Total number of requested operations
    pub fn len(&self) -> usize {
        self.actions.len() + self.data_actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject requests that name nothing or contain a blank entry
    ///
    /// An empty request is satisfied by every role, and a blank entry is
    /// granted by none.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(AdvisorError::EmptyRequest);
        }

        for (field, entries) in [("action", &self.actions), ("data action", &self.data_actions)] {
            if let Some(index) = entries.iter().position(|entry| entry.trim().is_empty()) {
                return Err(AdvisorError::BlankOperation { field, index });
            }
        }

        Ok(())
    }
}

/// A role that satisfies a request, with its ranking data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeastPrivilegeResult<'a> {
    /// The satisfying role
    pub role: &'a Role,

    /// Requested actions this role grants
    pub matching_actions: Vec<String>,

    /// Requested data actions this role grants
    pub matching_data_actions: Vec<String>,

    /// Privilege weight of the role
    pub permission_count: f64,

    /// The role grants exactly the requested literals and nothing else
    pub is_exact_match: bool,
}
