use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::dto::{ConnectionDto, ConnectionPayloadDto};
use crate::api::{ApiClient, ApiResult, constants};

/// Remote capability needed by the connection resource
#[async_trait]
pub trait ConnectionsClient: Send + Sync {
    async fn create_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        payload: &ConnectionPayloadDto,
    ) -> ApiResult<ConnectionDto>;

    /// Fails with [`crate::api::ApiError::NotFound`] when the connection is gone
    async fn get_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        connection_id: &str,
    ) -> ApiResult<ConnectionDto>;

    async fn update_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        connection_id: &str,
        display_name: &str,
    ) -> ApiResult<ConnectionDto>;

    async fn delete_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        connection_id: &str,
    ) -> ApiResult<()>;
}

pub struct HttpConnectionsClient {
    api: Arc<ApiClient>,
}

impl HttpConnectionsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    fn url(&self, connector_name: &str, connection_id: &str) -> String {
        let host = &self.api.endpoints().powerapps_host;
        constants::connection_endpoint(host, connector_name, connection_id)
    }
}

#[async_trait]
impl ConnectionsClient for HttpConnectionsClient {
    async fn create_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        payload: &ConnectionPayloadDto,
    ) -> ApiResult<ConnectionDto> {
        // The service creates connections by PUT to a caller-chosen id
        let connection_id = uuid::Uuid::new_v4().simple().to_string();
        let filter = constants::environment_filter(environment_id);
        self.api
            .execute(
                Method::PUT,
                &self.url(connector_name, &connection_id),
                &[("api-version", constants::POWERAPPS_API_VERSION), ("$filter", filter.as_str())],
                Some(payload),
            )
            .await
    }

    async fn get_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        connection_id: &str,
    ) -> ApiResult<ConnectionDto> {
        let filter = constants::environment_filter(environment_id);
        self.api
            .execute(
                Method::GET,
                &self.url(connector_name, connection_id),
                &[("api-version", constants::POWERAPPS_API_VERSION), ("$filter", filter.as_str())],
                None::<&serde_json::Value>,
            )
            .await
    }

    async fn update_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        connection_id: &str,
        display_name: &str,
    ) -> ApiResult<ConnectionDto> {
        let filter = constants::environment_filter(environment_id);
        let payload = ConnectionPayloadDto::new(environment_id, display_name);
        self.api
            .execute(
                Method::PUT,
                &self.url(connector_name, connection_id),
                &[("api-version", constants::POWERAPPS_API_VERSION), ("$filter", filter.as_str())],
                Some(&payload),
            )
            .await
    }

    async fn delete_connection(
        &self,
        environment_id: &str,
        connector_name: &str,
        connection_id: &str,
    ) -> ApiResult<()> {
        let filter = constants::environment_filter(environment_id);
        self.api
            .execute_no_content(
                Method::DELETE,
                &self.url(connector_name, connection_id),
                &[("api-version", constants::POWERAPPS_API_VERSION), ("$filter", filter.as_str())],
                None::<&serde_json::Value>,
            )
            .await
    }
}
