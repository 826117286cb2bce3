//! In-memory stand-ins for the remote capabilities

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use powerplatform_provider::api::{ApiError, ApiResult};
use powerplatform_provider::provider::{ProviderClient, ProviderData};
use powerplatform_provider::services::connection::dto::{
    ConnectionDto, ConnectionPayloadDto, ConnectionPropertiesDto, ConnectionStatusDto,
};
use powerplatform_provider::services::connection::ConnectionsClient;
use powerplatform_provider::services::tenant_settings::{TenantSettingsClient, TenantSettingsDto};
use serde_json::json;

pub fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        body: "Internal Server Error".to_string(),
    }
}

pub fn sample_tenant_settings() -> TenantSettingsDto {
    serde_json::from_value(json!({
        "walkMeOptOut": true,
        "disableNPSCommentsReachout": false,
        "disableNewsletterSendout": true,
        "disableEnvironmentCreationByNonAdminUsers": false,
        "disablePortalsCreationByNonAdminUsers": true,
        "disableSurveyFeedback": false,
        "disableTrialEnvironmentCreationByNonAdminUsers": true,
        "disableCapacityAllocationByEnvironmentAdmins": false,
        "disableSupportTicketsVisibleByAllUsers": true,
        "powerPlatform": {
            "search": {
                "disableDocsSearch": true,
                "disableCommunitySearch": false,
                "disableBingVideoSearch": true
            },
            "teamsIntegration": { "shareWithColleaguesUserLimit": 10000 },
            "powerApps": {
                "disableShareWithEveryone": true,
                "enableGuestsToMake": false,
                "disableMembersIndicator": true,
                "disableMakerMatch": false,
                "disableUnusedLicenseAssignment": true,
                "disableCreateFromImage": false,
                "disableCreateFromFigma": true,
                "disableConnectionSharingWithEveryone": true
            },
            "powerAutomate": { "disableCopilot": true },
            "environments": { "disablePreferredDataLocationForTeamsEnvironment": false },
            "governance": {
                "disableAdminDigest": true,
                "disableDeveloperEnvironmentCreationByNonAdminUsers": false,
                "enableDefaultEnvironmentRouting": true,
                "policy": { "enableDesktopFlowDataPolicyManagement": true }
            },
            "licensing": {
                "disableBillingPolicyCreationByNonAdminUsers": true,
                "enableTenantCapacityReportForEnvironmentAdmins": false,
                "storageCapacityConsumptionWarningThreshold": 85,
                "enableTenantLicensingReportForEnvironmentAdmins": true,
                "disableUseOfUnassignedAIBuilderCredits": true
            },
            "powerPages": {},
            "champions": {
                "disableChampionsInvitationReachout": true,
                "disableSkillsMatchInvitationReachout": false
            },
            "intelligence": {
                "disableCopilot": false,
                "enableOpenAiBotPublishing": true
            },
            "modelExperimentation": {
                "enableModelDataSharing": true,
                "disableDataLogging": false
            },
            "catalogSettings": { "powerCatalogAudienceSetting": "All" }
        }
    }))
    .expect("sample tenant settings should decode")
}

/// Serves a fixed settings document, or fails on demand
#[derive(Default)]
pub struct FakeTenantSettingsClient {
    pub settings: Mutex<TenantSettingsDto>,
    pub fail: Mutex<bool>,
    pub calls: Mutex<usize>,
}

impl FakeTenantSettingsClient {
    pub fn with_settings(settings: TenantSettingsDto) -> Self {
        Self {
            settings: Mutex::new(settings),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: Mutex::new(true),
            ..Default::default()
        }
    }
}

#[async_trait]
impl TenantSettingsClient for FakeTenantSettingsClient {
    async fn get_tenant_settings(&self) -> ApiResult<TenantSettingsDto> {
        *self.calls.lock().unwrap() += 1;
        if *self.fail.lock().unwrap() {
            return Err(server_error());
        }
        Ok(self.settings.lock().unwrap().clone())
    }
}

/// A connection as the fake service stores it
#[derive(Debug, Clone)]
pub struct StoredConnection {
    pub environment_id: String,
    pub connector_name: String,
    pub display_name: String,
    pub statuses: Vec<String>,
}

/// Which remote verb should fail with a server error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Create,
    Get,
    Update,
    Delete,
}

#[derive(Default)]
pub struct FakeConnectionsClient {
    pub connections: Mutex<HashMap<String, StoredConnection>>,
    pub fail_on: Mutex<Option<FailOn>>,
    pub next_id: Mutex<usize>,
    /// Every payload handed to `create_connection`
    pub created: Mutex<Vec<ConnectionPayloadDto>>,
}

impl FakeConnectionsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&self, verb: FailOn) {
        *self.fail_on.lock().unwrap() = Some(verb);
    }

    pub fn clear_failure(&self) {
        *self.fail_on.lock().unwrap() = None;
    }

    pub fn insert(&self, id: &str, connection: StoredConnection) {
        self.connections.lock().unwrap().insert(id.to_string(), connection);
    }

    /// Remove a connection behind the resource's back
    pub fn remove(&self, id: &str) {
        self.connections.lock().unwrap().remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.connections.lock().unwrap().contains_key(id)
    }

    fn check(&self, verb: FailOn) -> ApiResult<()> {
        if *self.fail_on.lock().unwrap() == Some(verb) {
            return Err(server_error());
        }
        Ok(())
    }

    fn lookup(
        &self,
        environment_id: &str,
        connector_name: &str,
        connection_id: &str,
    ) -> ApiResult<StoredConnection> {
        self.connections
            .lock()
            .unwrap()
            .get(connection_id)
            .filter(|stored| {
                stored.environment_id == environment_id && stored.connector_name == connector_name
            })
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                url: format!("{}/{}/{}", environment_id, connector_name, connection_id),
            })
    }
}

pub fn to_dto(id: &str, stored: &StoredConnection) -> ConnectionDto {
    ConnectionDto {
        name: id.to_string(),
        id: format!(
            "/providers/Microsoft.PowerApps/apis/{}/connections/{}",
            stored.connector_name, id
        ),
        kind: "Microsoft.PowerApps/apis/connections".to_string(),
        properties: ConnectionPropertiesDto {
            api_id: format!("/providers/Microsoft.PowerApps/apis/{}", stored.connector_name),
            display_name: stored.display_name.clone(),
            statuses: stored
                .statuses
                .iter()
                .map(|status| ConnectionStatusDto {
                    status: status.clone(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        },
    }
}

#[async_trait]
impl ConnectionsClient for FakeConnectionsClient {
    async fn create_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        payload: &ConnectionPayloadDto,
    ) -> ApiResult<ConnectionDto> {
        self.check(FailOn::Create)?;
        self.created.lock().unwrap().push(payload.clone());

        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            format!("conn{}", next_id)
        };
        let stored = StoredConnection {
            environment_id: environment_id.to_string(),
            connector_name: connector_name.to_string(),
            display_name: payload.properties.display_name.clone(),
            statuses: vec!["Connected".to_string()],
        };
        let dto = to_dto(&id, &stored);
        self.insert(&id, stored);
        Ok(dto)
    }

    async fn get_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        connection_id: &str,
    ) -> ApiResult<ConnectionDto> {
        self.check(FailOn::Get)?;
        let stored = self.lookup(environment_id, connector_name, connection_id)?;
        Ok(to_dto(connection_id, &stored))
    }

    async fn update_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        connection_id: &str,
        display_name: &str,
    ) -> ApiResult<ConnectionDto> {
        self.check(FailOn::Update)?;
        let mut stored = self.lookup(environment_id, connector_name, connection_id)?;
        stored.display_name = display_name.to_string();
        self.insert(connection_id, stored.clone());
        Ok(to_dto(connection_id, &stored))
    }

    async fn delete_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        connection_id: &str,
    ) -> ApiResult<()> {
        self.check(FailOn::Delete)?;
        self.lookup(environment_id, connector_name, connection_id)?;
        self.remove(connection_id);
        Ok(())
    }
}

pub fn provider_data(
    tenant_settings: Arc<FakeTenantSettingsClient>,
    connections: Arc<FakeConnectionsClient>,
) -> ProviderData {
    ProviderClient::with_clients(tenant_settings, connections).into()
}
