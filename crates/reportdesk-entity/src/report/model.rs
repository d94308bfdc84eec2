//! Report entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reportdesk_core::{AppError, AppResult};

use super::status::ReportStatus;
use crate::validation;

/// A community report submitted by a resident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Report {
    /// Unique report identifier.
    #[sqlx(rename = "report_id")]
    pub id: i64,
    /// The resident who submitted the report.
    pub resident_id: i64,
    /// Free-form report type; the presentation layer constrains the option set.
    pub report_type: String,
    /// Where the reported issue is located.
    pub location: String,
    /// Description of the issue.
    pub description: String,
    /// Current triage status.
    pub status: ReportStatus,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// When the report was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Validate the report's required fields and formats.
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(
            self.resident_id,
            &self.report_type,
            &self.location,
            &self.description,
        )
    }
}

/// Data required to submit a new report. Status is not part of the input;
/// submission always starts at [`ReportStatus::Pending`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReport {
    /// The submitting resident's ID.
    pub resident_id: i64,
    /// Report type.
    pub report_type: String,
    /// Location of the issue.
    pub location: String,
    /// Description of the issue.
    pub description: String,
}

impl NewReport {
    /// Validate the submission data.
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(
            self.resident_id,
            &self.report_type,
            &self.location,
            &self.description,
        )
    }
}

fn validate_fields(
    resident_id: i64,
    report_type: &str,
    location: &str,
    description: &str,
) -> AppResult<()> {
    if resident_id <= 0 {
        return Err(AppError::validation("Report must belong to a resident"));
    }
    if !validation::is_valid_report_type(report_type) {
        return Err(AppError::validation("Report type is required"));
    }
    if !validation::is_not_empty(location) {
        return Err(AppError::validation("Location is required"));
    }
    if !validation::is_not_empty(description) {
        return Err(AppError::validation("Description is required"));
    }
    Ok(())
}
