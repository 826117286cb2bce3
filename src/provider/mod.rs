//! Host-facing provider plumbing shared by every resource kind

pub mod schema;

use std::any::Any;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::error::ProviderError;
use crate::services::connection::{ConnectionsClient, HttpConnectionsClient};
use crate::services::tenant_settings::{HttpTenantSettingsClient, TenantSettingsClient};

pub use schema::{Attribute, AttributeType, Schema};

/// Prefix of every resource and data source type name
pub const PROVIDER_TYPE_NAME: &str = "powerplatform";

/// Remote capabilities handed to the controllers at configure time
#[derive(Clone)]
pub struct ProviderClient {
    pub tenant_settings: Arc<dyn TenantSettingsClient>,
    pub connections: Arc<dyn ConnectionsClient>,
}

impl ProviderClient {
    /// Build the HTTP-backed capabilities over one shared API client
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            tenant_settings: Arc::new(HttpTenantSettingsClient::new(api.clone())),
            connections: Arc::new(HttpConnectionsClient::new(api)),
        }
    }

    pub fn with_clients(
        tenant_settings: Arc<dyn TenantSettingsClient>,
        connections: Arc<dyn ConnectionsClient>,
    ) -> Self {
        Self {
            tenant_settings,
            connections,
        }
    }
}

/// Opaque value the host passes to every controller's Configure call
#[derive(Clone)]
pub struct ProviderData {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ProviderData {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl From<ProviderClient> for ProviderData {
    fn from(client: ProviderClient) -> Self {
        ProviderData::new(client)
    }
}

/// Check that the host supplied a [`ProviderClient`] and hand it out
pub fn provider_client(
    data: &ProviderData,
    resource: &str,
) -> Result<Arc<ProviderClient>, ProviderError> {
    data.value
        .clone()
        .downcast::<ProviderClient>()
        .map_err(|_| ProviderError::Configuration {
            resource: resource.to_string(),
            got: data.type_name.to_string(),
        })
}

/// Result of refreshing a resource from the remote system
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome<T> {
    Found(T),
    /// The object no longer exists remotely; the host should drop its record
    Removed,
}

impl<T> ReadOutcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            ReadOutcome::Found(state) => Some(state),
            ReadOutcome::Removed => None,
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, ReadOutcome::Removed)
    }
}

/// What applying a plan against prior state requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    Create,
    NoOp,
    Update,
    /// Destroy then create; lists the attributes forcing it
    Replace(Vec<String>),
}
