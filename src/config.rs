use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{CloudEndpoints, CredentialSet};

pub const ENV_TENANT_ID: &str = "POWER_PLATFORM_TENANT_ID";
pub const ENV_CLIENT_ID: &str = "POWER_PLATFORM_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "POWER_PLATFORM_CLIENT_SECRET";
pub const ENV_CLOUD: &str = "POWER_PLATFORM_CLOUD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default = "default_cloud")]
    pub cloud: String,
    /// Overrides the cloud's Business Application Platform host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bapi_url: Option<String>,
    /// Overrides the cloud's PowerApps host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powerapps_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_cloud() -> String {
    "public".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            tenant_id: None,
            client_id: None,
            client_secret: None,
            cloud: default_cloud(),
            bapi_url: None,
            powerapps_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("powerplatform-provider")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".powerplatform-provider")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (if any), then apply `.env` and environment overrides
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    /// Apply overrides from a variable lookup; non-empty values win over the file
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(value) = lookup(ENV_TENANT_ID) {
            self.tenant_id = Some(value);
        }
        if let Some(value) = lookup(ENV_CLIENT_ID) {
            self.client_id = Some(value);
        }
        if let Some(value) = lookup(ENV_CLIENT_SECRET) {
            self.client_secret = Some(value);
        }
        if let Some(value) = lookup(ENV_CLOUD) {
            self.cloud = value;
        }
    }

    pub fn credentials(&self) -> Result<CredentialSet> {
        let tenant_id = self
            .tenant_id
            .clone()
            .with_context(|| format!("tenant_id is not configured (set {})", ENV_TENANT_ID))?;
        let client_id = self
            .client_id
            .clone()
            .with_context(|| format!("client_id is not configured (set {})", ENV_CLIENT_ID))?;
        let client_secret = self
            .client_secret
            .clone()
            .with_context(|| {
                format!("client_secret is not configured (set {})", ENV_CLIENT_SECRET)
            })?;

        Ok(CredentialSet::ClientCredentials {
            tenant_id,
            client_id,
            client_secret,
        })
    }

    pub fn endpoints(&self) -> CloudEndpoints {
        let mut endpoints = CloudEndpoints::for_cloud(&self.cloud);
        if let Some(host) = &self.bapi_url {
            endpoints.bapi_host = strip_scheme(host);
        }
        if let Some(host) = &self.powerapps_url {
            endpoints.powerapps_host = strip_scheme(host);
        }
        endpoints
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn strip_scheme(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}
