//! User management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use reportdesk_core::config::AppConfig;
use reportdesk_core::error::AppError;
use reportdesk_database::repositories::UserRepository;
use reportdesk_entity::user::{CreateUser, UserRole};
use reportdesk_service::UserService;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List {
        /// Filter by role (Admin or Resident)
        #[arg(short, long)]
        role: Option<String>,
    },
    /// Register a new user
    Register {
        /// Username
        #[arg(long)]
        username: String,
        /// Full name
        #[arg(long)]
        full_name: String,
        /// Home address
        #[arg(long)]
        address: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Role (Admin or Resident)
        #[arg(long, default_value = "Resident")]
        role: String,
    },
    /// Reset a user's password
    SetPassword {
        /// Username
        username: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: i64,
    /// Username
    username: String,
    /// Full name
    full_name: String,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Registered at
    created_at: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let service = UserService::new(Arc::new(UserRepository::new(pool.clone())));

    match &args.command {
        UserCommand::List { role } => {
            let users = match role.as_deref() {
                Some(role) => service.list_by_role(role.parse::<UserRole>()?).await?,
                None => service.list_all().await?,
            };

            let rows: Vec<UserRow> = users
                .iter()
                .map(|u| UserRow {
                    id: u.id,
                    username: u.username.clone(),
                    full_name: u.full_name.clone(),
                    email: u.email.clone(),
                    role: u.role.to_string(),
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
        UserCommand::Register {
            username,
            full_name,
            address,
            email,
            role,
        } => {
            let password = dialoguer::Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

            let user = service
                .register(CreateUser {
                    username: username.clone(),
                    password,
                    full_name: full_name.clone(),
                    address: address.clone(),
                    gender: None,
                    email: email.clone(),
                    contact_number: None,
                    birthday: None,
                    role: role.parse::<UserRole>()?,
                })
                .await?;

            output::print_success(&format!(
                "Registered {} '{}' (id {})",
                user.role, user.username, user.id
            ));
        }
        UserCommand::SetPassword { username } => {
            let user = service
                .find_by_username(username)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{}' not found", username)))?;

            let password = dialoguer::Password::new()
                .with_prompt("New password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

            service.change_password(user.id, &password).await?;
            output::print_success(&format!("Password updated for '{}'", username));
        }
    }

    Ok(())
}
