use clap::Subcommand;

use crate::cli::utils::{output_data, output_success};
use crate::cli::OutputFormat;
use crate::types::{UserFilter, UserRole};

#[derive(Subcommand)]
pub enum PermissionCommands {
    #[command(about = "List user roles on an operation")]
    Users {
        #[arg(help = "Operation slug")]
        operation: String,
        #[arg(long, help = "Filter by user name")]
        name: Option<String>,
    },

    #[command(about = "List user group roles on an operation")]
    Groups {
        #[arg(help = "Operation slug")]
        operation: String,
        #[arg(long, help = "Filter by group name")]
        name: Option<String>,
    },

    #[command(about = "Set a user's role on an operation")]
    SetUser {
        #[arg(help = "Operation slug")]
        operation: String,
        #[arg(help = "User slug")]
        user: String,
        #[arg(help = "Role: admin, write, read or no_access")]
        role: UserRole,
    },

    #[command(about = "Set a user group's role on an operation")]
    SetGroup {
        #[arg(help = "Operation slug")]
        operation: String,
        #[arg(help = "User group slug")]
        group: String,
        #[arg(help = "Role: admin, write, read or no_access")]
        role: UserRole,
    },
}

fn filter_from(name: Option<String>) -> UserFilter {
    UserFilter { name }
}

pub async fn handle(cmd: PermissionCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let service = crate::cli::build_service()?;

    match cmd {
        PermissionCommands::Users { operation, name } => {
            let roles = service
                .get_user_permissions(&operation, &filter_from(name))
                .await?;
            output_data(&output_format, "permissions", &roles)
        }
        PermissionCommands::Groups { operation, name } => {
            let roles = service
                .get_user_group_permissions(&operation, &filter_from(name))
                .await?;
            output_data(&output_format, "permissions", &roles)
        }
        PermissionCommands::SetUser {
            operation,
            user,
            role,
        } => {
            service.set_user_permission(&operation, &user, role).await?;
            output_success(
                &output_format,
                &format!("Set role of user {} on {} to {}", user, operation, role),
            )
        }
        PermissionCommands::SetGroup {
            operation,
            group,
            role,
        } => {
            service
                .set_user_group_permission(&operation, &group, role)
                .await?;
            output_success(
                &output_format,
                &format!("Set role of group {} on {} to {}", group, operation, role),
            )
        }
    }
}
