//! Announcement management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use reportdesk_core::config::AppConfig;
use reportdesk_core::error::AppError;
use reportdesk_database::repositories::AnnouncementRepository;
use reportdesk_entity::announcement::NewAnnouncement;
use reportdesk_service::AnnouncementService;

/// Arguments for announcement commands
#[derive(Debug, Args)]
pub struct AnnouncementArgs {
    /// Announcement subcommand
    #[command(subcommand)]
    pub command: AnnouncementCommand,
}

/// Announcement subcommands
#[derive(Debug, Subcommand)]
pub enum AnnouncementCommand {
    /// List announcements, newest first
    List {
        /// Limit to the most recent N entries
        #[arg(short, long)]
        limit: Option<i64>,
    },
    /// Publish an announcement and notify every resident
    Publish {
        /// Authoring admin's user ID
        #[arg(long)]
        admin_id: i64,
        /// Title
        #[arg(long)]
        title: String,
        /// Body content
        #[arg(long)]
        content: String,
    },
    /// Delete an announcement
    Delete {
        /// Announcement ID
        announcement_id: i64,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Announcement display row for table output
#[derive(Debug, Serialize, Tabled)]
struct AnnouncementRow {
    /// Announcement ID
    id: i64,
    /// Authoring admin
    admin_id: i64,
    /// Title
    title: String,
    /// Content preview
    content: String,
    /// Published at
    created_at: String,
}

/// Execute announcement commands
pub async fn execute(
    args: &AnnouncementArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let service = AnnouncementService::new(
        Arc::new(AnnouncementRepository::new(pool.clone())),
        super::build_fanout(&pool),
    );

    match &args.command {
        AnnouncementCommand::List { limit } => {
            let announcements = match limit {
                Some(limit) => service.recent(*limit).await?,
                None => service.list_all().await?,
            };

            let rows: Vec<AnnouncementRow> = announcements
                .iter()
                .map(|a| AnnouncementRow {
                    id: a.id,
                    admin_id: a.admin_id,
                    title: a.title.clone(),
                    content: a.truncated_content(60),
                    created_at: a.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
        AnnouncementCommand::Publish {
            admin_id,
            title,
            content,
        } => {
            let announcement = service
                .publish(NewAnnouncement {
                    admin_id: *admin_id,
                    title: title.clone(),
                    content: content.clone(),
                })
                .await?;
            output::print_success(&format!(
                "Announcement {} published, residents notified",
                announcement.id
            ));
        }
        AnnouncementCommand::Delete {
            announcement_id,
            force,
        } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete announcement {}?", announcement_id))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;
                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            if service.delete(*announcement_id).await? {
                output::print_success(&format!("Announcement {} deleted", announcement_id));
            } else {
                return Err(AppError::not_found(format!(
                    "Announcement {} not found",
                    announcement_id
                )));
            }
        }
    }

    Ok(())
}
