use clap::Subcommand;

use crate::cli::utils::{output_data, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum OperationCommands {
    #[command(about = "List operations visible to you")]
    List,

    #[command(about = "List every operation (requires admin)")]
    ListAll,

    #[command(about = "Show a single operation")]
    Show {
        #[arg(help = "Operation slug")]
        slug: String,
    },

    #[command(about = "Create a new operation; the slug is derived from the name")]
    Create {
        #[arg(help = "Display name")]
        name: String,
    },

    #[command(about = "Rename an operation (slug stays fixed)")]
    Rename {
        #[arg(help = "Operation slug")]
        slug: String,
        #[arg(help = "New display name")]
        name: String,
    },

    #[command(about = "Delete an operation")]
    Delete {
        #[arg(help = "Operation slug")]
        slug: String,
    },

    #[command(about = "Mark or unmark an operation as a favorite")]
    Favorite {
        #[arg(help = "Operation slug")]
        slug: String,
        #[arg(long, help = "Remove the favorite flag instead of setting it")]
        clear: bool,
    },
}

pub async fn handle(cmd: OperationCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let service = crate::cli::build_service()?;

    match cmd {
        OperationCommands::List => {
            let operations = service.get_operations().await?;
            output_data(&output_format, "operations", &operations)
        }
        OperationCommands::ListAll => {
            let operations = service.get_operations_for_admin().await?;
            output_data(&output_format, "operations", &operations)
        }
        OperationCommands::Show { slug } => {
            let operation = service.get_operation(&slug).await?;
            output_data(&output_format, "operation", &operation)
        }
        OperationCommands::Create { name } => {
            let operation = service.create_operation(&name).await?;
            output_success(
                &output_format,
                &format!("Created operation '{}' ({})", operation.name, operation.slug),
            )
        }
        OperationCommands::Rename { slug, name } => {
            service.save_operation(&slug, &name).await?;
            output_success(&output_format, &format!("Renamed {} to '{}'", slug, name))
        }
        OperationCommands::Delete { slug } => {
            service.delete_operation(&slug).await?;
            output_success(&output_format, &format!("Deleted operation {}", slug))
        }
        OperationCommands::Favorite { slug, clear } => {
            service.set_favorite(&slug, !clear).await?;
            let message = if clear {
                format!("Removed favorite flag from {}", slug)
            } else {
                format!("Marked {} as favorite", slug)
            };
            output_success(&output_format, &message)
        }
    }
}
