//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use reportdesk_core::config::AppConfig;
use reportdesk_core::error::AppError;
use reportdesk_database::connection::DatabasePool;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Check database connectivity
    Health,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            let pool = super::create_db_pool(config).await?;
            println!("Running database migrations...");
            reportdesk_database::migration::run_migrations(&pool).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Health => {
            let pool = DatabasePool::connect(&config.database).await?;
            if pool.health_check().await? {
                output::print_success("Database is reachable.");
            } else {
                return Err(AppError::database("Health check returned unexpected value"));
            }
        }
    }

    Ok(())
}
