//! System-wide broadcast CLI commands.

use clap::{Args, Subcommand};

use crate::output;
use reportdesk_core::config::AppConfig;
use reportdesk_core::error::AppError;

/// Arguments for broadcast commands
#[derive(Debug, Args)]
pub struct BroadcastArgs {
    /// Broadcast subcommand
    #[command(subcommand)]
    pub command: BroadcastCommand,
}

/// Broadcast subcommands
#[derive(Debug, Subcommand)]
pub enum BroadcastCommand {
    /// Send a system notification to every user
    Send {
        /// Title
        #[arg(short, long)]
        title: String,
        /// Message body
        #[arg(short, long)]
        message: String,
    },
}

/// Execute broadcast commands
pub async fn execute(args: &BroadcastArgs, config: &AppConfig) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let fanout = super::build_fanout(&pool);

    match &args.command {
        BroadcastCommand::Send { title, message } => {
            let delivered = fanout.system_broadcast(title, message).await?;
            output::print_success(&format!("Broadcast sent to {} users", delivered));
        }
    }

    Ok(())
}
