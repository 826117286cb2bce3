use std::sync::Arc;

use log::debug;

use super::client::TenantSettingsClient;
use super::convert::convert_from_tenant_settings_dto;
use super::models::TenantSettingsDataSourceModel;
use super::schema::tenant_settings_schema;
use crate::error::ProviderError;
use crate::provider::{PROVIDER_TYPE_NAME, ProviderData, Schema, provider_client};

/// Read-only view of the tenant-wide admin settings
pub struct TenantSettingsDataSource {
    client: Option<Arc<dyn TenantSettingsClient>>,
    provider_type_name: String,
    type_name: String,
}

impl Default for TenantSettingsDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TenantSettingsDataSource {
    pub fn new() -> Self {
        Self {
            client: None,
            provider_type_name: PROVIDER_TYPE_NAME.to_string(),
            type_name: "_tenant_settings".to_string(),
        }
    }

    /// Create a data source already bound to a client
    pub fn with_client(client: Arc<dyn TenantSettingsClient>) -> Self {
        Self {
            client: Some(client),
            ..Self::new()
        }
    }

    pub fn type_name(&self) -> String {
        format!("{}{}", self.provider_type_name, self.type_name)
    }

    pub fn schema(&self) -> Schema {
        tenant_settings_schema()
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Bind to the host's provider client. Absent provider data leaves the
    /// data source unconfigured; the host configures again once it has it.
    pub fn configure(&mut self, provider_data: Option<&ProviderData>) -> Result<(), ProviderError> {
        let Some(data) = provider_data else {
            return Ok(());
        };

        let provider = provider_client(data, &self.type_name())?;
        self.client = Some(provider.tenant_settings.clone());
        Ok(())
    }

    pub async fn read(&self) -> Result<TenantSettingsDataSourceModel, ProviderError> {
        debug!("READ DATASOURCE TENANT SETTINGS START: {}", self.type_name());

        let client = self.client.as_ref().ok_or_else(|| ProviderError::NotConfigured {
            resource: self.type_name(),
        })?;

        let tenant_settings = client
            .get_tenant_settings()
            .await
            .map_err(|source| ProviderError::RemoteRead {
                resource: self.type_name(),
                source,
            })?;

        let mut state = convert_from_tenant_settings_dto(&tenant_settings);
        // Not unique below one second; only there to give the state an identity
        state.id = chrono::Utc::now().timestamp().to_string();

        debug!("READ DATASOURCE TENANT SETTINGS END: {}", self.type_name());
        Ok(state)
    }
}
