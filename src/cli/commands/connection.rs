use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use std::path::PathBuf;

use super::{build_provider_data, print_json, read_json, report};
use crate::cli::app::GlobalArgs;
use crate::provider::{PlanAction, ReadOutcome};
use crate::services::connection::{ConnectionResource, ConnectionResourceModel};

#[derive(Args)]
pub struct ConnectionCommands {
    #[command(subcommand)]
    pub command: ConnectionSubcommands,
}

#[derive(Subcommand)]
pub enum ConnectionSubcommands {
    /// Create a connection and print its state
    Create {
        #[arg(long)]
        environment_id: String,
        /// Connector name, e.g. shared_sql
        #[arg(long)]
        name: String,
        #[arg(long)]
        display_name: Option<String>,
    },
    /// Refresh a state file from the service
    Read {
        #[arg(long)]
        state: PathBuf,
    },
    /// Show how a plan would be applied on top of a state
    Plan {
        #[arg(long)]
        state: Option<PathBuf>,
        #[arg(long)]
        plan: PathBuf,
    },
    /// Apply a plan in place
    Update {
        #[arg(long)]
        state: PathBuf,
        #[arg(long)]
        plan: PathBuf,
    },
    /// Delete the connection described by a state file
    Delete {
        #[arg(long)]
        state: PathBuf,
    },
    /// Import an existing connection by `<environment_id>/<connector_name>/<connection_id>`
    Import { id: String },
}

fn print_outcome(outcome: ReadOutcome<ConnectionResourceModel>) -> Result<()> {
    match outcome {
        ReadOutcome::Found(state) => print_json(&state),
        ReadOutcome::Removed => {
            eprintln!("{}", "Connection no longer exists; drop it from state".yellow());
            Ok(())
        }
    }
}

pub async fn handle_connection_command(
    args: ConnectionCommands,
    global: &GlobalArgs,
) -> Result<()> {
    let mut resource = ConnectionResource::new();

    // Planning is local; no credentials needed
    if let ConnectionSubcommands::Plan { state, plan } = &args.command {
        let prior = state
            .as_deref()
            .map(read_json::<ConnectionResourceModel>)
            .transpose()?;
        let plan: ConnectionResourceModel = read_json(plan)?;
        let action = match resource.plan_change(prior.as_ref(), &plan) {
            PlanAction::Create => "create".green().to_string(),
            PlanAction::NoOp => "no changes".dimmed().to_string(),
            PlanAction::Update => "update in place".yellow().to_string(),
            PlanAction::Replace(attributes) => {
                format!("{} (forced by {})", "replace".red(), attributes.join(", "))
            }
        };
        println!("{}", action);
        return Ok(());
    }

    let provider_data = build_provider_data(global)?;
    resource.configure(Some(&provider_data)).map_err(report)?;

    match args.command {
        ConnectionSubcommands::Create {
            environment_id,
            name,
            display_name,
        } => {
            let mut plan = ConnectionResourceModel::new(environment_id, name);
            plan.display_name = display_name;
            let state = resource.create(plan).await.map_err(report)?;
            print_json(&state)
        }
        ConnectionSubcommands::Read { state } => {
            let state: ConnectionResourceModel = read_json(&state)?;
            print_outcome(resource.read(state).await.map_err(report)?)
        }
        ConnectionSubcommands::Update { state, plan } => {
            let prior: ConnectionResourceModel = read_json(&state)?;
            let plan: ConnectionResourceModel = read_json(&plan)?;
            let state = resource.update(plan, &prior).await.map_err(report)?;
            print_json(&state)
        }
        ConnectionSubcommands::Delete { state } => {
            let state: ConnectionResourceModel = read_json(&state)?;
            resource.delete(&state).await.map_err(report)?;
            println!("{}", "Connection deleted".green());
            Ok(())
        }
        ConnectionSubcommands::Import { id } => {
            let seed = resource.import_state(&id).map_err(report)?;
            print_outcome(resource.read(seed).await.map_err(report)?)
        }
        ConnectionSubcommands::Plan { .. } => Ok(()),
    }
}
