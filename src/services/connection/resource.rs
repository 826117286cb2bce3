use std::sync::Arc;

use log::{debug, info};
use serde_json::Value;

use super::client::ConnectionsClient;
use super::convert::convert_from_connection_dto;
use super::dto::ConnectionPayloadDto;
use super::import::ConnectionKey;
use super::models::ConnectionResourceModel;
use super::schema::connection_schema;
use crate::error::ProviderError;
use crate::provider::{
    PROVIDER_TYPE_NAME, PlanAction, ProviderData, ReadOutcome, Schema, provider_client,
};

/// Full lifecycle controller for connections
pub struct ConnectionResource {
    client: Option<Arc<dyn ConnectionsClient>>,
    provider_type_name: String,
    type_name: String,
}

impl Default for ConnectionResource {
    fn default() -> Self {
        Self::new()
    }
}

fn as_value(model: &ConnectionResourceModel) -> Value {
    // A struct of strings always serializes
    serde_json::to_value(model).unwrap_or_default()
}

impl ConnectionResource {
    pub fn new() -> Self {
        Self {
            client: None,
            provider_type_name: PROVIDER_TYPE_NAME.to_string(),
            type_name: "_connection".to_string(),
        }
    }

    pub fn with_client(client: Arc<dyn ConnectionsClient>) -> Self {
        Self {
            client: Some(client),
            ..Self::new()
        }
    }

    pub fn type_name(&self) -> String {
        format!("{}{}", self.provider_type_name, self.type_name)
    }

    pub fn schema(&self) -> Schema {
        connection_schema()
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn configure(&mut self, provider_data: Option<&ProviderData>) -> Result<(), ProviderError> {
        let Some(data) = provider_data else {
            return Ok(());
        };

        let provider = provider_client(data, &self.type_name())?;
        self.client = Some(provider.connections.clone());
        Ok(())
    }

    fn client(&self) -> Result<&Arc<dyn ConnectionsClient>, ProviderError> {
        self.client.as_ref().ok_or_else(|| ProviderError::NotConfigured {
            resource: self.type_name(),
        })
    }

    fn key(&self, state: &ConnectionResourceModel) -> Result<ConnectionKey, ProviderError> {
        let connection_id = state.id.clone().ok_or_else(|| ProviderError::MissingAttribute {
            resource: self.type_name(),
            attribute: "id".to_string(),
        })?;
        Ok(ConnectionKey::new(&state.environment_id, &state.name, connection_id))
    }

    /// Decide how the engine should apply `plan` on top of `prior`
    pub fn plan_change(
        &self,
        prior: Option<&ConnectionResourceModel>,
        plan: &ConnectionResourceModel,
    ) -> PlanAction {
        let Some(prior) = prior else {
            return PlanAction::Create;
        };

        let replacing = self.schema().replacement_attributes(&as_value(prior), &as_value(plan));
        if !replacing.is_empty() {
            return PlanAction::Replace(replacing);
        }

        // An unset display name is computed and keeps whatever the service has
        match &plan.display_name {
            Some(display_name) if prior.display_name.as_ref() != Some(display_name) => {
                PlanAction::Update
            }
            _ => PlanAction::NoOp,
        }
    }

    pub async fn create(
        &self,
        plan: ConnectionResourceModel,
    ) -> Result<ConnectionResourceModel, ProviderError> {
        debug!("CREATE RESOURCE START: {}", self.type_name());
        let client = self.client()?;

        let display_name = plan.display_name.as_deref().unwrap_or_default();
        let payload = ConnectionPayloadDto::new(&plan.environment_id, display_name);

        let connection = client
            .create_connection(&plan.environment_id, &plan.name, &payload)
            .await
            .map_err(|source| ProviderError::RemoteCreate {
                resource: self.type_name(),
                source,
            })?;

        let state = plan.sync_from_remote(convert_from_connection_dto(&connection));

        debug!("CREATE RESOURCE END: {}", self.type_name());
        Ok(state)
    }

    pub async fn read(
        &self,
        state: ConnectionResourceModel,
    ) -> Result<ReadOutcome<ConnectionResourceModel>, ProviderError> {
        debug!("READ RESOURCE START: {}", self.type_name());
        let client = self.client()?;
        let key = self.key(&state)?;

        let connection = match client
            .get_connection(&key.environment_id, &key.connector_name, &key.connection_id)
            .await
        {
            Ok(connection) => connection,
            Err(err) if err.is_not_found() => {
                info!(
                    "{} {} no longer exists, removing it from state",
                    self.type_name(),
                    key
                );
                return Ok(ReadOutcome::Removed);
            }
            Err(source) => {
                return Err(ProviderError::RemoteRead {
                    resource: self.type_name(),
                    source,
                });
            }
        };

        let state = state.sync_from_remote(convert_from_connection_dto(&connection));

        debug!("READ RESOURCE END: {}", self.type_name());
        Ok(ReadOutcome::Found(state))
    }

    pub async fn update(
        &self,
        plan: ConnectionResourceModel,
        prior: &ConnectionResourceModel,
    ) -> Result<ConnectionResourceModel, ProviderError> {
        debug!("UPDATE RESOURCE START: {}", self.type_name());
        let client = self.client()?;

        if let Some(attribute) = self
            .schema()
            .replacement_attributes(&as_value(prior), &as_value(&plan))
            .into_iter()
            .next()
        {
            return Err(ProviderError::RequiresReplace {
                resource: self.type_name(),
                attribute,
            });
        }

        // id is computed; a plan carries it only once known
        let mut plan = plan;
        if plan.id.is_none() {
            plan.id = prior.id.clone();
        }
        let key = self.key(&plan)?;
        let display_name = plan
            .display_name
            .clone()
            .or_else(|| prior.display_name.clone())
            .unwrap_or_default();

        let connection = client
            .update_connection(
                &key.environment_id,
                &key.connector_name,
                &key.connection_id,
                &display_name,
            )
            .await
            .map_err(|source| ProviderError::RemoteUpdate {
                resource: self.type_name(),
                source,
            })?;

        let state = plan.sync_from_remote(convert_from_connection_dto(&connection));

        debug!("UPDATE RESOURCE END: {}", self.type_name());
        Ok(state)
    }

    /// On error the caller still owns `state` and keeps it for a retry
    pub async fn delete(&self, state: &ConnectionResourceModel) -> Result<(), ProviderError> {
        debug!("DELETE RESOURCE START: {}", self.type_name());
        let client = self.client()?;
        let key = self.key(state)?;

        client
            .delete_connection(&key.environment_id, &key.connector_name, &key.connection_id)
            .await
            .map_err(|source| ProviderError::RemoteDelete {
                resource: self.type_name(),
                source,
            })?;

        debug!("DELETE RESOURCE END: {}", self.type_name());
        Ok(())
    }

    /// Seed state from an `<environment_id>/<connector_name>/<connection_id>` id
    pub fn import_state(&self, import_id: &str) -> Result<ConnectionResourceModel, ProviderError> {
        let key: ConnectionKey = import_id.parse().map_err(|err: super::import::ParseKeyError| {
            ProviderError::InvalidImportId {
                resource: self.type_name(),
                id: import_id.to_string(),
                message: err.to_string(),
            }
        })?;

        debug!("IMPORT RESOURCE: {} {}", self.type_name(), key);
        Ok(key.into_model())
    }
}
