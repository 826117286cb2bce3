//! API constants and endpoint builders for the Power Platform admin APIs

/// Business Application Platform API version used for tenant settings
pub const BAPI_API_VERSION: &str = "2023-06-01";

/// PowerApps API version used for connections
pub const POWERAPPS_API_VERSION: &str = "2016-11-01";

/// Provider namespace used when addressing environments
pub const POWERAPPS_NAMESPACE: &str = "Microsoft.PowerApps";

/// Provider namespace of the tenant settings endpoint
pub const BAPI_NAMESPACE: &str = "Microsoft.BusinessAppPlatform";

/// Azure AD authority host
pub const AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// Standard headers
pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// Correlation header echoed back by the service in its own logs
    pub const X_CORRELATION_ID: &str = "x-ms-correlation-id";

    pub const USER_AGENT: &str = "powerplatform-provider/0.1";
}

/// Host names for one sovereign cloud
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudEndpoints {
    pub bapi_host: String,
    pub powerapps_host: String,
    /// Token scope accepted by both hosts
    pub powerapps_scope: String,
}

impl CloudEndpoints {
    /// Endpoints for a named cloud, falling back to the public cloud
    pub fn for_cloud(cloud: &str) -> Self {
        let (bapi, powerapps, scope) = match cloud.to_ascii_lowercase().as_str() {
            "gcc" => (
                "gov.api.bap.microsoft.us",
                "gov.api.powerapps.us",
                "https://gov.service.powerapps.us/.default",
            ),
            "gcchigh" => (
                "high.api.bap.microsoft.us",
                "high.api.powerapps.us",
                "https://high.service.powerapps.us/.default",
            ),
            "dod" => (
                "api.bap.appsplatform.us",
                "api.apps.appsplatform.us",
                "https://service.apps.appsplatform.us/.default",
            ),
            "china" => (
                "api.bap.partner.microsoftonline.cn",
                "api.powerapps.cn",
                "https://service.powerapps.cn/.default",
            ),
            _ => (
                "api.bap.microsoft.com",
                "api.powerapps.com",
                "https://service.powerapps.com//.default",
            ),
        };

        Self {
            bapi_host: bapi.to_string(),
            powerapps_host: powerapps.to_string(),
            powerapps_scope: scope.to_string(),
        }
    }
}

/// Build the token endpoint for a tenant
pub fn token_endpoint(tenant_id: &str) -> String {
    format!("{}/{}/oauth2/v2.0/token", AUTHORITY_HOST, tenant_id)
}

/// Build the tenant settings endpoint
pub fn tenant_settings_endpoint(bapi_host: &str) -> String {
    format!(
        "https://{}/providers/{}/listTenantSettings",
        bapi_host, BAPI_NAMESPACE
    )
}

/// Build the endpoint of a single connection of a connector
pub fn connection_endpoint(
    powerapps_host: &str,
    connector_name: &str,
    connection_id: &str,
) -> String {
    format!(
        "https://{}/providers/{}/apis/{}/connections/{}",
        powerapps_host,
        POWERAPPS_NAMESPACE,
        urlencoding::encode(connector_name),
        urlencoding::encode(connection_id)
    )
}

/// Environment addressing path embedded in connection payloads
pub fn environment_path(environment_id: &str) -> String {
    format!("/providers/{}/environments/{}", POWERAPPS_NAMESPACE, environment_id)
}

/// OData filter scoping a connection request to one environment. Quotes in
/// the id are doubled as OData string literals require.
pub fn environment_filter(environment_id: &str) -> String {
    format!("environment eq '{}'", environment_id.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_path() {
        assert_eq!(
            environment_path("env1"),
            "/providers/Microsoft.PowerApps/environments/env1"
        );
    }

    #[test]
    fn test_environment_filter_escapes_quotes() {
        assert_eq!(environment_filter("env1"), "environment eq 'env1'");
        assert_eq!(environment_filter("o'brien"), "environment eq 'o''brien'");
    }

    #[test]
    fn test_connection_endpoint_encodes_segments() {
        let url = connection_endpoint("api.powerapps.com", "shared_sql", "a b");
        assert!(url.starts_with("https://api.powerapps.com/providers/Microsoft.PowerApps/apis/"));
        assert!(url.ends_with("/shared_sql/connections/a%20b"));
    }

    #[test]
    fn test_unknown_cloud_falls_back_to_public() {
        let endpoints = CloudEndpoints::for_cloud("somewhere");
        assert_eq!(endpoints.bapi_host, "api.bap.microsoft.com");
        assert_eq!(CloudEndpoints::for_cloud("PUBLIC"), endpoints);
    }
}
