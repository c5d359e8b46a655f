pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::client::HttpDataSource;
use crate::services::OperationService;

#[derive(Parser)]
#[command(name = "ops")]
#[command(about = "Ops Console - Command-line client for the operations API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create, inspect and manage operations")]
    Operation {
        #[command(subcommand)]
        cmd: commands::operation::OperationCommands,
    },

    #[command(about = "User and group permissions on an operation")]
    Permission {
        #[command(subcommand)]
        cmd: commands::permission::PermissionCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Build the service against the configured backend
pub(crate) fn build_service() -> anyhow::Result<OperationService<HttpDataSource>> {
    let config = crate::config::config();
    let data_source = HttpDataSource::new(&config.api)?;
    Ok(OperationService::new(data_source))
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Operation { cmd } => commands::operation::handle(cmd, output_format).await,
        Commands::Permission { cmd } => commands::permission::handle(cmd, output_format).await,
    }
}
