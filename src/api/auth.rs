use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use tokio::sync::RwLock;

use super::constants;
use super::error::{ApiError, ApiResult};
use super::models::{CredentialSet, TokenInfo};

/// Acquires and caches access tokens, one per scope
pub struct AuthManager {
    credentials: CredentialSet,
    tokens: RwLock<HashMap<String, TokenInfo>>,
}

impl AuthManager {
    pub fn new(credentials: CredentialSet) -> Self {
        Self {
            credentials,
            tokens: RwLock::new(HashMap::new()),
        }
    }

    /// Return a valid token for `scope`, authenticating if the cache has none
    pub async fn token(&self, http_client: &reqwest::Client, scope: &str) -> ApiResult<String> {
        if let Some(token) = self.tokens.read().await.get(scope) {
            if token.is_fresh() {
                return Ok(token.access_token.clone());
            }
            log::debug!("Cached token for scope {} is about to expire", scope);
        }

        let token = self.authenticate(http_client, scope).await?;
        let access_token = token.access_token.clone();
        self.tokens.write().await.insert(scope.to_string(), token);
        Ok(access_token)
    }

    async fn authenticate(
        &self,
        http_client: &reqwest::Client,
        scope: &str,
    ) -> ApiResult<TokenInfo> {
        let CredentialSet::ClientCredentials {
            tenant_id,
            client_id,
            client_secret,
        } = &self.credentials;
        log::info!("Authenticating client {} against tenant {}", client_id, tenant_id);

        let response = http_client
            .post(constants::token_endpoint(tenant_id))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
                ("scope", scope),
            ])
            .send()
            .await?;

        log::debug!("Token request status: {}", response.status());

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(ApiError::Auth(error_text));
        }

        let token_data: serde_json::Value = response.json().await?;
        parse_token_response(&token_data)
    }
}

fn parse_token_response(token_data: &serde_json::Value) -> ApiResult<TokenInfo> {
    let access_token = token_data
        .get("access_token")
        .and_then(|t| t.as_str())
        .ok_or_else(|| ApiError::Auth("No access token in response".to_string()))?;

    // Default to one hour if the authority omits the lifetime
    let expires_in = token_data
        .get("expires_in")
        .and_then(|e| e.as_u64().or_else(|| e.as_str().and_then(|s| s.parse().ok())))
        .unwrap_or(3600);

    Ok(TokenInfo {
        access_token: access_token.to_string(),
        expires_at: SystemTime::now() + Duration::from_secs(expires_in),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_token_response() {
        let token = parse_token_response(&json!({
            "access_token": "abc",
            "expires_in": 3599,
            "token_type": "Bearer"
        }))
        .unwrap();
        assert_eq!(token.access_token, "abc");
        assert!(token.is_fresh());
    }

    #[test]
    fn test_parse_token_response_string_lifetime() {
        let token = parse_token_response(&json!({
            "access_token": "abc",
            "expires_in": "30"
        }))
        .unwrap();
        assert!(!token.is_fresh());
    }

    #[test]
    fn test_parse_token_response_without_token() {
        let err = parse_token_response(&json!({ "error": "invalid_client" })).unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
    }
}
