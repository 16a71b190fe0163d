//! Core role-definition types

use serde::{Deserialize, Serialize};

/// Unique role identifier
pub type RoleId = String;

/// Whether a role ships with the platform or was defined by a tenant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    /// Platform-provided role
    #[default]
    #[serde(rename = "BuiltInRole", alias = "BuiltIn")]
    BuiltIn,
    /// Tenant-defined role
    #[serde(rename = "CustomRole", alias = "Custom")]
    Custom,
}

/// One allow/deny bundle inside a role
///
/// `not_actions` only narrows what `actions` grants within this same set, and
/// `not_data_actions` does the same for `data_actions`. Missing fields decode
/// as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    /// Control-plane operations granted (literal or wildcard)
    #[serde(default)]
    pub actions: Vec<String>,

    /// Control-plane operations carved out of `actions`
    #[serde(default)]
    pub not_actions: Vec<String>,

    /// Data-plane operations granted (literal or wildcard)
    #[serde(default)]
    pub data_actions: Vec<String>,

    /// Data-plane operations carved out of `data_actions`
    #[serde(default)]
    pub not_data_actions: Vec<String>,
}

impl PermissionSet {
    /// Create an empty permission set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the granted actions
    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = actions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the denied actions
    pub fn with_not_actions<I, S>(mut self, not_actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.not_actions = not_actions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the granted data actions
    pub fn with_data_actions<I, S>(mut self, data_actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_actions = data_actions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the denied data actions
    pub fn with_not_data_actions<I, S>(mut self, not_data_actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.not_data_actions = not_data_actions.into_iter().map(Into::into).collect();
        self
    }

    /// True when all four lists are empty
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
            && self.not_actions.is_empty()
            && self.data_actions.is_empty()
            && self.not_data_actions.is_empty()
    }
}

/// A role definition from the catalog
///
/// Field names follow the camelCase shape of cloud role-definition documents.
/// A role owns its permission sets; scopes are carried along uninterpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier
    pub id: RoleId,

    /// Definition name, a GUID in cloud role-definition documents
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub definition_name: Option<String>,

    /// Display name
    #[serde(rename = "roleName")]
    pub name: String,

    /// Built-in or custom
    #[serde(rename = "roleType", default)]
    pub kind: RoleKind,

    /// Human description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Permission sets, OR'd together
    #[serde(default)]
    pub permissions: Vec<PermissionSet>,

    /// Assignable scopes (opaque)
    #[serde(rename = "assignableScopes", default)]
    pub scopes: Vec<String>,

    /// Pre-computed privilege weight, attached after construction
    #[serde(rename = "permissionCount", default, skip_serializing_if = "Option::is_none")]
    pub permission_count: Option<f64>,
}

impl Role {
    /// Create a built-in role with no permissions
    pub fn new(id: impl Into<RoleId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            definition_name: None,
            name: name.into(),
            kind: RoleKind::BuiltIn,
            description: None,
            permissions: Vec::new(),
            scopes: Vec::new(),
            permission_count: None,
        }
    }

    /// Set the role kind
    pub fn with_kind(mut self, kind: RoleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a permission set
    pub fn with_permission_set(mut self, set: PermissionSet) -> Self {
        self.permissions.push(set);
        self
    }

    /// Append an assignable scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Attach a pre-computed privilege weight
    pub fn with_permission_count(mut self, weight: f64) -> Self {
        self.permission_count = Some(weight);
        self
    }

    /// True for platform-provided roles
    pub fn is_built_in(&self) -> bool {
        self.kind == RoleKind::BuiltIn
    }
}

/// An operation exposed by a provider, independent of any role
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderOperation {
    /// Operation identifier, e.g. `Provider.Storage/accounts/read`
    pub name: String,

    /// Provider namespace that exposes it
    #[serde(default)]
    pub provider: String,
}

impl ProviderOperation {
    /// Create a new provider operation record
    pub fn new(name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
        }
    }
}
