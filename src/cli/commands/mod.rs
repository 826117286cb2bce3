pub mod connection;
pub mod tenant_settings;

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::app::GlobalArgs;
use crate::api::{ApiClient, ApiLogger};
use crate::auth::Credentials;
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::provider::{ProviderClient, ProviderData};

/// Resolve configuration and build the provider data the controllers bind to
pub fn build_provider_data(global: &GlobalArgs) -> Result<ProviderData> {
    let mut config = match &global.config {
        Some(path) => {
            let mut config = ProviderConfig::load_from(path)?;
            config.apply_overrides(|name| std::env::var(name).ok());
            config
        }
        None => ProviderConfig::load()?,
    };

    if let Some(env_file) = &global.env_file {
        Credentials::from_env_file(env_file)?.apply_to(&mut config);
    }
    Credentials::from_command_line(
        global.tenant_id.clone(),
        global.client_id.clone(),
        global.client_secret.clone(),
    )
    .apply_to(&mut config);

    let api = ApiClient::new(config.credentials()?, config.endpoints(), config.timeout())
        .context("Failed to build HTTP client")?
        .with_logger(ApiLogger::new(log::log_enabled!(log::Level::Trace)));

    Ok(ProviderClient::new(Arc::new(api)).into())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the error as a diagnostic and hand it back for the exit status
pub fn report(err: ProviderError) -> anyhow::Error {
    let diagnostic = err.to_diagnostic();
    eprintln!("{} {}", "Error:".red().bold(), diagnostic.summary.bold());
    eprintln!("  {}", diagnostic.detail);
    anyhow::Error::new(err)
}
