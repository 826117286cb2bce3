use anyhow::{Context, Result};
use log::info;
use std::collections::HashMap;
use std::path::Path;

use crate::config::{ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_TENANT_ID, ProviderConfig};

/// Service principal credentials gathered outside the config file
#[derive(Default)]
pub struct Credentials {
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Credentials {
    /// Read credentials from a specific `.env` file without touching the
    /// process environment
    pub fn from_env_file(path: &Path) -> Result<Credentials> {
        info!("Importing from .env file: {:?}", path);

        if !path.exists() {
            anyhow::bail!("Environment file not found: {:?}", path);
        }

        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to load .env file {:?}", path))?
        {
            let (key, value) =
                item.with_context(|| format!("Failed to parse .env file {:?}", path))?;
            vars.insert(key, value);
        }

        Ok(Credentials {
            tenant_id: vars.remove(ENV_TENANT_ID),
            client_id: vars.remove(ENV_CLIENT_ID),
            client_secret: vars.remove(ENV_CLIENT_SECRET),
        })
    }

    pub fn from_command_line(
        tenant_id: Option<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Credentials {
        info!("Using command line parameters");

        Credentials {
            tenant_id,
            client_id,
            client_secret,
        }
    }

    /// Values present here replace those in `config`
    pub fn apply_to(self, config: &mut ProviderConfig) {
        let vars: HashMap<&str, String> = [
            (ENV_TENANT_ID, self.tenant_id),
            (ENV_CLIENT_ID, self.client_id),
            (ENV_CLIENT_SECRET, self.client_secret),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect();

        config.apply_overrides(|name| vars.get(name).cloned());
    }
}
