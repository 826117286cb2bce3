use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use powerplatform_provider::cli::commands::connection::handle_connection_command;
use powerplatform_provider::cli::commands::print_json;
use powerplatform_provider::cli::commands::tenant_settings::handle_tenant_settings_command;
use powerplatform_provider::cli::{Cli, Commands};
use powerplatform_provider::{ConnectionResource, TenantSettingsDataSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(path) = &cli.global.log_file {
        // Truncate on each run
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        logger.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    logger.init();

    info!("Starting powerplatform-provider");

    match cli.command {
        Commands::TenantSettings(args) => handle_tenant_settings_command(args, &cli.global).await,
        Commands::Connection(args) => handle_connection_command(args, &cli.global).await,
        Commands::Schema { type_name } => {
            let data_source = TenantSettingsDataSource::new();
            let resource = ConnectionResource::new();
            if type_name == data_source.type_name() {
                print_json(&data_source.schema())
            } else if type_name == resource.type_name() {
                print_json(&resource.schema())
            } else {
                bail!("Unknown type name: {}", type_name)
            }
        }
    }
}
