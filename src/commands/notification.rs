//! Notification inbox CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use reportdesk_core::config::AppConfig;
use reportdesk_core::error::AppError;
use reportdesk_database::repositories::NotificationRepository;
use reportdesk_service::NotificationService;

/// Arguments for notification commands
#[derive(Debug, Args)]
pub struct NotificationArgs {
    /// Notification subcommand
    #[command(subcommand)]
    pub command: NotificationCommand,
}

/// Notification subcommands
#[derive(Debug, Subcommand)]
pub enum NotificationCommand {
    /// List a user's notifications, newest first
    List {
        /// Recipient user ID
        #[arg(short, long)]
        user: i64,
        /// Only show unread notifications
        #[arg(long)]
        unread: bool,
    },
    /// Show a user's unread count
    UnreadCount {
        /// Recipient user ID
        user: i64,
    },
    /// Mark a notification as read
    MarkRead {
        /// Notification ID
        notification_id: i64,
    },
    /// Mark all of a user's notifications as read
    MarkAllRead {
        /// Recipient user ID
        user: i64,
    },
}

/// Notification display row for table output
#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    /// Notification ID
    id: i64,
    /// Kind
    kind: String,
    /// Title
    title: String,
    /// Message preview
    message: String,
    /// Read state
    read: bool,
    /// Created at
    created_at: String,
}

/// Execute notification commands
pub async fn execute(
    args: &NotificationArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let service = NotificationService::new(Arc::new(NotificationRepository::new(pool.clone())));

    match &args.command {
        NotificationCommand::List { user, unread } => {
            let notifications = if *unread {
                service.list_unread_for_user(*user).await?
            } else {
                service.list_for_user(*user).await?
            };

            let rows: Vec<NotificationRow> = notifications
                .iter()
                .map(|n| NotificationRow {
                    id: n.id,
                    kind: n.kind.to_string(),
                    title: n.title.clone(),
                    message: n.truncated_message(60),
                    read: n.is_read,
                    created_at: n.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
        NotificationCommand::UnreadCount { user } => {
            let count = service.unread_count(*user).await?;
            println!("{}", count);
        }
        NotificationCommand::MarkRead { notification_id } => {
            if service.mark_as_read(*notification_id).await? {
                output::print_success(&format!("Notification {} marked read", notification_id));
            } else {
                return Err(AppError::not_found(format!(
                    "Notification {} not found",
                    notification_id
                )));
            }
        }
        NotificationCommand::MarkAllRead { user } => {
            if service.mark_all_as_read_for_user(*user).await? {
                output::print_success("All notifications marked read");
            } else {
                println!("No unread notifications.");
            }
        }
    }

    Ok(())
}
