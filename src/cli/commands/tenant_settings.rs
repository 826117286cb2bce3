use anyhow::Result;
use clap::{Args, Subcommand};

use super::{build_provider_data, print_json, report};
use crate::cli::app::GlobalArgs;
use crate::services::tenant_settings::TenantSettingsDataSource;

#[derive(Args)]
pub struct TenantSettingsCommands {
    #[command(subcommand)]
    pub command: TenantSettingsSubcommands,
}

#[derive(Subcommand)]
pub enum TenantSettingsSubcommands {
    /// Fetch the current tenant settings
    Read,
}

pub async fn handle_tenant_settings_command(
    args: TenantSettingsCommands,
    global: &GlobalArgs,
) -> Result<()> {
    let provider_data = build_provider_data(global)?;
    let mut data_source = TenantSettingsDataSource::new();
    data_source.configure(Some(&provider_data)).map_err(report)?;

    match args.command {
        TenantSettingsSubcommands::Read => {
            let state = data_source.read().await.map_err(report)?;
            print_json(&state)
        }
    }
}
