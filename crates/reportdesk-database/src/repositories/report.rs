//! Report repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use reportdesk_core::error::{AppError, ErrorKind};
use reportdesk_core::result::AppResult;
use reportdesk_entity::report::{NewReport, Report, ReportStatus};

use crate::gateway::ReportStore;

/// Repository for report CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for ReportRepository {
    async fn create(&self, report: &NewReport) -> AppResult<Report> {
        report.validate()?;

        // Submissions always start at Pending, regardless of caller input.
        sqlx::query_as::<_, Report>(
            "INSERT INTO reports (resident_id, report_type, location, description, status) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(report.resident_id)
        .bind(&report.report_type)
        .bind(&report.location)
        .bind(&report.description)
        .bind(ReportStatus::Pending)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create report", e))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Report>> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE report_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find report by id", e)
            })
    }

    async fn find_all(&self) -> AppResult<Vec<Report>> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reports", e))
    }

    async fn find_by_resident(&self, resident_id: i64) -> AppResult<Vec<Report>> {
        sqlx::query_as::<_, Report>(
            "SELECT * FROM reports WHERE resident_id = $1 ORDER BY created_at DESC",
        )
        .bind(resident_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reports by resident", e)
        })
    }

    async fn find_by_status(&self, status: ReportStatus) -> AppResult<Vec<Report>> {
        sqlx::query_as::<_, Report>(
            "SELECT * FROM reports WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reports by status", e)
        })
    }

    async fn update(&self, report: &Report) -> AppResult<Report> {
        if report.id <= 0 {
            return Err(AppError::validation("Report id must be positive"));
        }
        report.validate()?;

        let result = sqlx::query(
            "UPDATE reports SET resident_id = $1, report_type = $2, location = $3, \
             description = $4, status = $5, updated_at = NOW() WHERE report_id = $6",
        )
        .bind(report.resident_id)
        .bind(&report.report_type)
        .bind(&report.location)
        .bind(&report.description)
        .bind(report.status)
        .bind(report.id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update report", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Report not found"));
        }

        Ok(report.clone())
    }

    async fn update_status(&self, report_id: i64, status: ReportStatus) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE reports SET status = $1, updated_at = NOW() WHERE report_id = $2")
                .bind(status)
                .bind(report_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update report status", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reports WHERE report_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete report", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_by_status(&self, status: ReportStatus) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count reports by status", e)
            })
    }
}
