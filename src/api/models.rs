use std::time::{Duration, SystemTime};

/// Credentials used to obtain tokens for the admin APIs
#[derive(Clone)]
pub enum CredentialSet {
    ClientCredentials {
        tenant_id: String,
        client_id: String,
        client_secret: String,
    },
}

impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let CredentialSet::ClientCredentials { tenant_id, client_id, .. } = self;
        f.debug_struct("ClientCredentials")
            .field("tenant_id", tenant_id)
            .field("client_id", client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Cached token information for one scope
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub access_token: String,
    pub expires_at: SystemTime,
}

impl TokenInfo {
    /// Tokens are refreshed this long before they actually expire
    pub const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

    pub fn is_fresh(&self) -> bool {
        match self.expires_at.duration_since(SystemTime::now()) {
            Ok(remaining) => remaining > Self::EXPIRY_MARGIN,
            Err(_) => false,
        }
    }
}
