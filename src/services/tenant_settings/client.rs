use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use super::dto::TenantSettingsDto;
use crate::api::{ApiClient, ApiResult, constants};

/// Remote capability needed by the tenant settings data source
#[async_trait]
pub trait TenantSettingsClient: Send + Sync {
    async fn get_tenant_settings(&self) -> ApiResult<TenantSettingsDto>;
}

pub struct HttpTenantSettingsClient {
    api: Arc<ApiClient>,
}

impl HttpTenantSettingsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TenantSettingsClient for HttpTenantSettingsClient {
    async fn get_tenant_settings(&self) -> ApiResult<TenantSettingsDto> {
        let url = constants::tenant_settings_endpoint(&self.api.endpoints().bapi_host);
        // listTenantSettings is a POST even though it only reads
        self.api
            .execute(
                Method::POST,
                &url,
                &[("api-version", constants::BAPI_API_VERSION)],
                None::<&serde_json::Value>,
            )
            .await
    }
}
