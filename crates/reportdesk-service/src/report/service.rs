//! Report lifecycle: submission and admin status updates.

use std::sync::Arc;

use tracing::{info, warn};

use reportdesk_core::error::AppError;
use reportdesk_core::result::AppResult;
use reportdesk_database::gateway::{ReportStore, UserStore};
use reportdesk_entity::report::{NewReport, Report, ReportStatus};

use crate::notification::NotificationFanout;

/// Handles report submission, status changes, and listings.
#[derive(Clone)]
pub struct ReportService {
    /// Report gateway.
    reports: Arc<dyn ReportStore>,
    /// User gateway, for display enrichment.
    users: Arc<dyn UserStore>,
    /// Fanout service for submission and status-change events.
    fanout: NotificationFanout,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        reports: Arc<dyn ReportStore>,
        users: Arc<dyn UserStore>,
        fanout: NotificationFanout,
    ) -> Self {
        Self {
            reports,
            users,
            fanout,
        }
    }

    /// Submits a new report on behalf of a resident.
    ///
    /// The report is persisted with status Pending and every admin is
    /// notified. A fanout failure surfaces to the caller; the report
    /// itself stays created (best-effort two-step, no wrapping
    /// transaction).
    pub async fn submit(&self, submission: NewReport) -> AppResult<Report> {
        submission.validate()?;

        let report = self.reports.create(&submission).await?;
        info!(
            report_id = report.id,
            resident_id = report.resident_id,
            report_type = %report.report_type,
            "Report submitted"
        );

        self.fanout.report_submitted(&report).await?;
        Ok(report)
    }

    /// Applies an admin status change and notifies the owning resident.
    ///
    /// The previous status is captured from the loaded row *before* the
    /// persistence update, so the notification always carries the real
    /// prior value. Status update and notification are two sequential
    /// writes with no wrapping transaction; a crash in between leaves the
    /// report updated but the resident unnotified.
    pub async fn update_status(&self, report_id: i64, new_status: ReportStatus) -> AppResult<Report> {
        let mut report = self
            .reports
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| AppError::not_found("Report not found"))?;

        let old_status = report.status;

        let changed = self.reports.update_status(report_id, new_status).await?;
        if !changed {
            return Err(AppError::not_found("Report not found"));
        }
        report.status = new_status;

        info!(
            report_id,
            old_status = %old_status,
            new_status = %new_status,
            "Report status updated"
        );

        self.fanout
            .report_status_changed(&report, Some(old_status))
            .await?;

        Ok(report)
    }

    /// Finds a report by id.
    pub async fn find(&self, report_id: i64) -> AppResult<Option<Report>> {
        self.reports.find_by_id(report_id).await
    }

    /// Lists every report, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<Report>> {
        self.reports.find_all().await
    }

    /// Lists a resident's own reports, newest first.
    pub async fn list_by_resident(&self, resident_id: i64) -> AppResult<Vec<Report>> {
        self.reports.find_by_resident(resident_id).await
    }

    /// Lists reports with the given status, newest first.
    pub async fn list_by_status(&self, status: ReportStatus) -> AppResult<Vec<Report>> {
        self.reports.find_by_status(status).await
    }

    /// Counts reports with the given status.
    pub async fn count_by_status(&self, status: ReportStatus) -> AppResult<i64> {
        self.reports.count_by_status(status).await
    }

    /// Deletes a report.
    pub async fn delete(&self, report_id: i64) -> AppResult<bool> {
        self.reports.delete(report_id).await
    }

    /// Resolves a resident's display name for report listings.
    ///
    /// Best-effort: a failed or empty lookup falls back to a placeholder
    /// rather than failing the whole listing.
    pub async fn resident_display_name(&self, resident_id: i64) -> String {
        match self.users.find_by_id(resident_id).await {
            Ok(Some(user)) => user.full_name,
            Ok(None) => format!("Resident #{resident_id}"),
            Err(e) => {
                warn!(resident_id, error = %e, "Resident lookup failed, using placeholder");
                format!("Resident #{resident_id}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationFanout;
    use crate::testing::{
        sample_report, sample_user, MemoryNotificationStore, MemoryReportStore, MemoryUserStore,
    };
    use reportdesk_core::error::ErrorKind;
    use reportdesk_database::gateway::NotificationStore;
    use reportdesk_entity::user::{User, UserRole};

    struct Fixture {
        users: Arc<MemoryUserStore>,
        notifications: Arc<MemoryNotificationStore>,
        service: ReportService,
    }

    fn fixture() -> Fixture {
        let users = MemoryUserStore::new();
        let reports = MemoryReportStore::new();
        let notifications = MemoryNotificationStore::new(users.clone());
        let fanout = NotificationFanout::new(users.clone(), notifications.clone());
        let service = ReportService::new(reports, users.clone(), fanout);
        Fixture {
            users,
            notifications,
            service,
        }
    }

    async fn add_user(f: &Fixture, username: &str, role: UserRole) -> User {
        f.users.create(&sample_user(username, role)).await.unwrap()
    }

    #[tokio::test]
    async fn test_submit_forces_pending_and_notifies_admins() {
        let f = fixture();
        let admin = add_user(&f, "admin", UserRole::Admin).await;
        let resident = add_user(&f, "resident", UserRole::Resident).await;

        let report = f.service.submit(sample_report(resident.id)).await.unwrap();
        assert_eq!(report.status, ReportStatus::Pending);

        let inbox = f.notifications.find_by_user(admin.id).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].related_id, Some(report.id));
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_description() {
        let f = fixture();
        let resident = add_user(&f, "resident", UserRole::Resident).await;

        let mut submission = sample_report(resident.id);
        submission.description = "   ".to_string();
        let err = f.service.submit(submission).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_update_status_notifies_resident_with_old_and_new() {
        let f = fixture();
        add_user(&f, "admin", UserRole::Admin).await;
        let resident = add_user(&f, "resident", UserRole::Resident).await;

        let report = f.service.submit(sample_report(resident.id)).await.unwrap();
        let updated = f
            .service
            .update_status(report.id, ReportStatus::Approved)
            .await
            .unwrap();
        assert_eq!(updated.status, ReportStatus::Approved);

        let inbox = f.notifications.find_by_user(resident.id).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert!(inbox[0].message.contains("Old Status: Pending"));
        assert!(inbox[0].message.contains("New Status: Approved"));
    }

    #[tokio::test]
    async fn test_update_status_unknown_report_is_not_found() {
        let f = fixture();
        let err = f
            .service
            .update_status(99, ReportStatus::Resolved)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_listings_filter_by_resident_and_status() {
        let f = fixture();
        let resident_a = add_user(&f, "resident_a", UserRole::Resident).await;
        let resident_b = add_user(&f, "resident_b", UserRole::Resident).await;

        let first = f
            .service
            .submit(sample_report(resident_a.id))
            .await
            .unwrap();
        f.service.submit(sample_report(resident_b.id)).await.unwrap();

        f.service
            .update_status(first.id, ReportStatus::Resolved)
            .await
            .unwrap();

        assert_eq!(f.service.list_all().await.unwrap().len(), 2);
        assert_eq!(
            f.service.list_by_resident(resident_a.id).await.unwrap().len(),
            1
        );
        assert_eq!(
            f.service
                .list_by_status(ReportStatus::Pending)
                .await
                .unwrap()
                .len(),
            1
        );
        assert_eq!(
            f.service
                .count_by_status(ReportStatus::Resolved)
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_submitted_report_round_trips_through_find() {
        let f = fixture();
        let resident = add_user(&f, "resident", UserRole::Resident).await;

        let submitted = f.service.submit(sample_report(resident.id)).await.unwrap();
        let found = f.service.find(submitted.id).await.unwrap().unwrap();
        assert_eq!(found, submitted);
    }

    #[tokio::test]
    async fn test_resident_display_name_falls_back_to_placeholder() {
        let f = fixture();
        let resident = add_user(&f, "resident", UserRole::Resident).await;

        let known = f.service.resident_display_name(resident.id).await;
        assert_eq!(known, resident.full_name);

        let unknown = f.service.resident_display_name(404).await;
        assert_eq!(unknown, "Resident #404");
    }
}
