//! Errors surfaced by the lifecycle controllers
//!
//! Every variant carries the resource type name so a diagnostic can be traced
//! back to the lifecycle phase that produced it. Remote failures keep the
//! underlying [`ApiError`] as their source; its message is reported verbatim.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The host handed over provider data of the wrong concrete type
    #[error("Unexpected {resource} configure type: expected ProviderClient, got: {got}")]
    Configuration { resource: String, got: String },

    #[error("{resource} has not been configured with a provider client")]
    NotConfigured { resource: String },

    #[error("Client error when reading {resource}: {source}")]
    RemoteRead { resource: String, source: ApiError },

    #[error("Failed to create {resource}: {source}")]
    RemoteCreate { resource: String, source: ApiError },

    #[error("Client error when updating {resource}: {source}")]
    RemoteUpdate { resource: String, source: ApiError },

    #[error("Client error when deleting {resource}: {source}")]
    RemoteDelete { resource: String, source: ApiError },

    #[error("Invalid import id '{id}' for {resource}: {message}")]
    InvalidImportId {
        resource: String,
        id: String,
        message: String,
    },

    #[error("{resource} state is missing required attribute `{attribute}`")]
    MissingAttribute { resource: String, attribute: String },

    #[error("Changing `{attribute}` of {resource} requires replacement, not an in-place update")]
    RequiresReplace { resource: String, attribute: String },
}

impl ProviderError {
    /// Lifecycle phase the error belongs to, used as the diagnostic summary prefix
    pub fn operation(&self) -> &'static str {
        match self {
            ProviderError::Configuration { .. } | ProviderError::NotConfigured { .. } => {
                "configure"
            }
            ProviderError::RemoteRead { .. } | ProviderError::MissingAttribute { .. } => "read",
            ProviderError::RemoteCreate { .. } => "create",
            ProviderError::RemoteUpdate { .. } | ProviderError::RequiresReplace { .. } => "update",
            ProviderError::RemoteDelete { .. } => "delete",
            ProviderError::InvalidImportId { .. } => "import",
        }
    }

    pub fn resource(&self) -> &str {
        match self {
            ProviderError::Configuration { resource, .. }
            | ProviderError::NotConfigured { resource }
            | ProviderError::RemoteRead { resource, .. }
            | ProviderError::RemoteCreate { resource, .. }
            | ProviderError::RemoteUpdate { resource, .. }
            | ProviderError::RemoteDelete { resource, .. }
            | ProviderError::InvalidImportId { resource, .. }
            | ProviderError::MissingAttribute { resource, .. }
            | ProviderError::RequiresReplace { resource, .. } => resource,
        }
    }

    /// Only remote failures are worth retrying; the host owns the policy
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::RemoteRead { .. }
                | ProviderError::RemoteCreate { .. }
                | ProviderError::RemoteUpdate { .. }
                | ProviderError::RemoteDelete { .. }
        )
    }

    /// Render as a host diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let summary = match self {
            ProviderError::Configuration { .. } => "Unexpected Resource Configure Type".to_string(),
            ProviderError::RemoteCreate { resource, .. } => {
                format!("Failed to create {}", resource)
            }
            other => format!("Client error when {} {}", other.operation_gerund(), other.resource()),
        };

        let detail = match self {
            ProviderError::RemoteRead { source, .. }
            | ProviderError::RemoteCreate { source, .. }
            | ProviderError::RemoteUpdate { source, .. }
            | ProviderError::RemoteDelete { source, .. } => source.to_string(),
            other => other.to_string(),
        };

        Diagnostic {
            severity: Severity::Error,
            summary,
            detail,
        }
    }

    fn operation_gerund(&self) -> &'static str {
        match self.operation() {
            "configure" => "configuring",
            "read" => "reading",
            "create" => "creating",
            "update" => "updating",
            "delete" => "deleting",
            _ => "importing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// A diagnostic as reported back to the declarative engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}
