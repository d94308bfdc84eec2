//! Report management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use reportdesk_core::config::AppConfig;
use reportdesk_core::error::AppError;
use reportdesk_database::repositories::{ReportRepository, UserRepository};
use reportdesk_entity::report::status::ALL_STATUSES;
use reportdesk_entity::report::{NewReport, Report, ReportStatus};
use reportdesk_service::ReportService;

/// Arguments for report commands
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report subcommand
    #[command(subcommand)]
    pub command: ReportCommand,
}

/// Report subcommands
#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// List reports
    List {
        /// Filter by status (Pending, In Review, Approved, In Progress, Resolved, Completed)
        #[arg(short, long)]
        status: Option<String>,
        /// Filter by submitting resident ID
        #[arg(short, long)]
        resident: Option<i64>,
    },
    /// Submit a report on behalf of a resident
    Submit {
        /// Submitting resident's user ID
        #[arg(long)]
        resident_id: i64,
        /// Report type
        #[arg(long = "type")]
        report_type: String,
        /// Location of the issue
        #[arg(long)]
        location: String,
        /// Description of the issue
        #[arg(long)]
        description: String,
    },
    /// Show a single report
    Show {
        /// Report ID
        report_id: i64,
    },
    /// Change a report's status and notify the resident
    SetStatus {
        /// Report ID
        report_id: i64,
        /// New status
        status: String,
    },
    /// Show report counts per status
    Stats,
}

/// Report display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ReportRow {
    /// Report ID
    id: i64,
    /// Submitting resident
    resident: String,
    /// Report type
    r#type: String,
    /// Location
    location: String,
    /// Status
    status: String,
    /// Submitted at
    created_at: String,
}

/// Per-status count row
#[derive(Debug, Serialize, Tabled)]
struct StatusCountRow {
    /// Status
    status: String,
    /// Report count
    count: i64,
}

/// Execute report commands
pub async fn execute(
    args: &ReportArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let users = Arc::new(UserRepository::new(pool.clone()));
    let service = ReportService::new(
        Arc::new(ReportRepository::new(pool.clone())),
        users,
        super::build_fanout(&pool),
    );

    match &args.command {
        ReportCommand::List { status, resident } => {
            let reports = match (status, resident) {
                (Some(status), _) => {
                    service
                        .list_by_status(status.parse::<ReportStatus>()?)
                        .await?
                }
                (None, Some(resident_id)) => service.list_by_resident(*resident_id).await?,
                (None, None) => service.list_all().await?,
            };

            let mut rows = Vec::with_capacity(reports.len());
            for report in &reports {
                rows.push(report_row(&service, report).await);
            }
            output::print_list(&rows, format);
        }
        ReportCommand::Submit {
            resident_id,
            report_type,
            location,
            description,
        } => {
            let report = service
                .submit(NewReport {
                    resident_id: *resident_id,
                    report_type: report_type.clone(),
                    location: location.clone(),
                    description: description.clone(),
                })
                .await?;
            output::print_success(&format!(
                "Report {} submitted ({})",
                report.id, report.status
            ));
        }
        ReportCommand::Show { report_id } => {
            let report = service
                .find(*report_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Report {} not found", report_id)))?;
            output::print_item(&report, format);
        }
        ReportCommand::SetStatus { report_id, status } => {
            let report = service
                .update_status(*report_id, status.parse::<ReportStatus>()?)
                .await?;
            output::print_success(&format!(
                "Report {} is now '{}', resident notified",
                report.id, report.status
            ));
        }
        ReportCommand::Stats => {
            let mut rows = Vec::new();
            for status in ALL_STATUSES {
                rows.push(StatusCountRow {
                    status: status.as_str().to_string(),
                    count: service.count_by_status(status).await?,
                });
            }
            output::print_list(&rows, format);
        }
    }

    Ok(())
}

async fn report_row(service: &ReportService, report: &Report) -> ReportRow {
    ReportRow {
        id: report.id,
        resident: service.resident_display_name(report.resident_id).await,
        r#type: report.report_type.clone(),
        location: report.location.clone(),
        status: report.status.to_string(),
        created_at: report.created_at.format("%Y-%m-%d %H:%M").to_string(),
    }
}
