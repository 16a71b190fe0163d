//! Error types for the role advisor
//!
//! The matching, weighting, directory and resolution passes never fail. Errors
//! only come from the edges: decoding role catalogs, validating them, reading
//! configuration and pulling roles from a [`RoleSource`](crate::catalog::RoleSource).

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Advisor errors
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Role catalog or directory JSON could not be decoded
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// A role definition failed validation
    #[error("Invalid role '{role}': {reason}")]
    InvalidRole { role: String, reason: String },

    /// A resolution request named no actions and no data actions
    #[error("Request must name at least one action or data action")]
    EmptyRequest,

    /// A resolution request contained a blank operation
    #[error("Request contains a blank {field} entry at position {index}")]
    BlankOperation { field: &'static str, index: usize },

    /// A configuration value could not be parsed
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    /// A role source failed to produce roles
    #[error("Role source error: {0}")]
    Source(String),

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Internal {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_role_display() {
        let err = AdvisorError::InvalidRole {
            role: "reader".to_string(),
            reason: "duplicate role id".to_string(),
        };
        assert!(err.to_string().contains("Invalid role 'reader'"));
        assert!(err.to_string().contains("duplicate role id"));
    }

    #[test]
    fn test_from_anyhow() {
        let err: AdvisorError = anyhow::anyhow!("source exploded").into();
        assert!(matches!(err, AdvisorError::Internal { .. }));
        assert!(err.to_string().contains("source exploded"));
    }

    #[test]
    fn test_from_serde_json() {
        let parse = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: AdvisorError = parse.into();
        assert!(matches!(err, AdvisorError::CatalogParse(_)));
    }
}
