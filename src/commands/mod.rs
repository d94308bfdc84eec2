//! CLI command definitions and dispatch.

pub mod announcement;
pub mod broadcast;
pub mod migrate;
pub mod notification;
pub mod report;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use reportdesk_core::config::AppConfig;
use reportdesk_core::error::AppError;
use reportdesk_database::connection::DatabasePool;
use reportdesk_database::repositories::{NotificationRepository, UserRepository};
use reportdesk_service::NotificationFanout;

/// Reportdesk — Community incident reporting and announcements
#[derive(Debug, Parser)]
#[command(name = "reportdesk", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
    /// Report management
    Report(report::ReportArgs),
    /// Announcement management
    Announcement(announcement::AnnouncementArgs),
    /// Notification inbox management
    Notification(notification::NotificationArgs),
    /// System-wide broadcast
    Broadcast(broadcast::BroadcastArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, config).await,
            Commands::User(args) => user::execute(args, config, self.format).await,
            Commands::Report(args) => report::execute(args, config, self.format).await,
            Commands::Announcement(args) => announcement::execute(args, config, self.format).await,
            Commands::Notification(args) => notification::execute(args, config, self.format).await,
            Commands::Broadcast(args) => broadcast::execute(args, config).await,
        }
    }
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    Ok(pool.pool().clone())
}

/// Helper: build the notification fanout over the given pool
pub fn build_fanout(pool: &sqlx::PgPool) -> NotificationFanout {
    NotificationFanout::new(
        Arc::new(UserRepository::new(pool.clone())),
        Arc::new(NotificationRepository::new(pool.clone())),
    )
}
