use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::auth::AuthManager;
use super::constants::{CloudEndpoints, headers};
use super::error::{ApiError, ApiResult};
use super::logging::{ApiLogger, RequestContext};
use super::models::CredentialSet;

/// Power Platform admin API client with connection pooling
pub struct ApiClient {
    http_client: reqwest::Client,
    auth: AuthManager,
    endpoints: CloudEndpoints,
    logger: ApiLogger,
}

impl ApiClient {
    pub fn new(
        credentials: CredentialSet,
        endpoints: CloudEndpoints,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(headers::USER_AGENT)
            .build()?;

        Ok(Self::with_custom_client(credentials, endpoints, http_client))
    }

    /// Create a new client with custom HTTP client configuration
    pub fn with_custom_client(
        credentials: CredentialSet,
        endpoints: CloudEndpoints,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            http_client,
            auth: AuthManager::new(credentials),
            endpoints,
            logger: ApiLogger::default(),
        }
    }

    pub fn with_logger(mut self, logger: ApiLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn endpoints(&self) -> &CloudEndpoints {
        &self.endpoints
    }

    /// Send a request and decode the JSON response body
    pub async fn execute<B, T>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.send(method, url, query, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a request whose response body is irrelevant
    pub async fn execute_no_content<B>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(method, url, query, body).await.map(|_| ())
    }

    async fn send<B>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> ApiResult<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let token = self
            .auth
            .token(&self.http_client, &self.endpoints.powerapps_scope)
            .await?;

        let context = RequestContext::new(method.as_str(), url);
        let body_value = body.map(serde_json::to_value).transpose()?;
        self.logger.log_request(&context, body_value.as_ref());

        let mut request = self
            .http_client
            .request(method, url)
            .bearer_auth(&token)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .header(headers::X_CORRELATION_ID, &context.correlation_id)
            .query(query);

        request = match &body_value {
            Some(value) => request.json(value),
            // The tenant settings endpoint is a POST without payload
            None => request.header("Content-Length", "0"),
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.logger.log_transport_failure(&context, &e.to_string());
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        self.logger.log_response(&context, status.as_u16());

        let bytes = response.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(ApiError::from_status(status.as_u16(), url, body));
        }

        Ok(bytes.to_vec())
    }
}
