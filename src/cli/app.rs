use super::commands::connection::ConnectionCommands;
use super::commands::tenant_settings::TenantSettingsCommands;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "powerplatform-provider")]
#[command(about = "Reconcile Power Platform tenant settings and connections")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file, defaults to the per-user config location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Read credentials from this .env file
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[arg(long, global = true)]
    pub tenant_id: Option<String>,

    #[arg(long, global = true)]
    pub client_id: Option<String>,

    #[arg(long, global = true)]
    pub client_secret: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read the tenant settings data source
    TenantSettings(TenantSettingsCommands),
    /// Manage connections
    Connection(ConnectionCommands),
    /// Print the schema of a resource or data source as JSON
    Schema {
        /// `powerplatform_tenant_settings` or `powerplatform_connection`
        type_name: String,
    },
}
