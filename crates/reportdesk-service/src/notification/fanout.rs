//! Notification fanout: translates domain events into per-recipient
//! notification rows.
//!
//! Failure policy: if fetching the recipient list or any single insert
//! fails, the whole fanout is aborted and one aggregated error surfaces to
//! the caller. There is no partial-success tracking and no retry.

use std::sync::Arc;

use tracing::info;

use reportdesk_core::error::AppError;
use reportdesk_core::result::AppResult;
use reportdesk_database::gateway::{NotificationStore, UserStore};
use reportdesk_entity::announcement::Announcement;
use reportdesk_entity::notification::{NewNotification, NotificationKind};
use reportdesk_entity::report::{Report, ReportStatus};
use reportdesk_entity::user::UserRole;

/// Materializes notifications in response to domain events.
#[derive(Clone)]
pub struct NotificationFanout {
    /// User gateway, for recipient resolution.
    users: Arc<dyn UserStore>,
    /// Notification gateway.
    notifications: Arc<dyn NotificationStore>,
}

impl NotificationFanout {
    /// Creates a new fanout service.
    pub fn new(users: Arc<dyn UserStore>, notifications: Arc<dyn NotificationStore>) -> Self {
        Self {
            users,
            notifications,
        }
    }

    /// A resident submitted a new report: notify every admin.
    ///
    /// Returns the number of notifications created.
    pub async fn report_submitted(&self, report: &Report) -> AppResult<usize> {
        let admins = self
            .users
            .find_by_role(UserRole::Admin)
            .await
            .map_err(|e| {
                AppError::internal(format!("Failed to create report submission notifications: {e}"))
            })?;

        let title = notification_title(&report.report_type);
        let message = format!(
            "New report submitted by Resident #{}\n\
             Type: {}\n\
             Location: {}\n\n\
             Description:\n{}",
            report.resident_id,
            report.report_type,
            location_or_unspecified(&report.location),
            description_or_placeholder(&report.description),
        );

        for admin in &admins {
            let notification = NewNotification {
                user_id: admin.id,
                title: title.clone(),
                message: message.clone(),
                kind: NotificationKind::Report,
                related_id: Some(report.id),
            };
            self.notifications.create(&notification).await.map_err(|e| {
                AppError::internal(format!("Failed to create report submission notifications: {e}"))
            })?;
        }

        info!(
            report_id = report.id,
            recipients = admins.len(),
            "Report submission fanned out to admins"
        );
        Ok(admins.len())
    }

    /// An admin changed a report's status: notify the owning resident.
    ///
    /// The caller must capture `old_status` *before* persisting the status
    /// update; this notification is the resident's sole status-change
    /// signal, and re-deriving the old value after the write would make
    /// the message meaningless.
    pub async fn report_status_changed(
        &self,
        report: &Report,
        old_status: Option<ReportStatus>,
    ) -> AppResult<()> {
        let message = format!(
            "Your report status has been updated.\n\
             Type: {}\n\
             Location: {}\n\
             Old Status: {}\n\
             New Status: {}\n\n\
             Description:\n{}",
            report.report_type,
            location_or_unspecified(&report.location),
            old_status.map(|s| s.as_str()).unwrap_or("-"),
            report.status.as_str(),
            description_or_placeholder(&report.description),
        );

        let notification = NewNotification {
            user_id: report.resident_id,
            title: notification_title(&report.report_type),
            message,
            kind: NotificationKind::Report,
            related_id: Some(report.id),
        };
        self.notifications.create(&notification).await.map_err(|e| {
            AppError::internal(format!(
                "Failed to create report status update notification: {e}"
            ))
        })?;

        info!(
            report_id = report.id,
            resident_id = report.resident_id,
            new_status = %report.status,
            "Report status change fanned out to resident"
        );
        Ok(())
    }

    /// An admin published an announcement: notify every resident.
    ///
    /// Returns the number of notifications created.
    pub async fn announcement_published(&self, announcement: &Announcement) -> AppResult<usize> {
        let residents = self
            .users
            .find_by_role(UserRole::Resident)
            .await
            .map_err(|e| {
                AppError::internal(format!("Failed to create announcement notifications: {e}"))
            })?;

        for resident in &residents {
            let notification = NewNotification {
                user_id: resident.id,
                title: "New Announcement".to_string(),
                message: format!("New announcement: {}", announcement.title),
                kind: NotificationKind::Announcement,
                related_id: Some(announcement.id),
            };
            self.notifications.create(&notification).await.map_err(|e| {
                AppError::internal(format!("Failed to create announcement notifications: {e}"))
            })?;
        }

        info!(
            announcement_id = announcement.id,
            recipients = residents.len(),
            "Announcement fanned out to residents"
        );
        Ok(residents.len())
    }

    /// Notify every user with a system message, in one batched insert.
    ///
    /// Returns the number of notifications created.
    pub async fn system_broadcast(&self, title: &str, message: &str) -> AppResult<u64> {
        let created = self
            .notifications
            .create_for_all_users(title, message, NotificationKind::System, None)
            .await
            .map_err(|e| {
                AppError::internal(format!("Failed to create system notifications: {e}"))
            })?;

        info!(recipients = created, "System broadcast fanned out");
        Ok(created)
    }
}

fn notification_title(report_type: &str) -> String {
    if report_type.trim().is_empty() {
        "Report".to_string()
    } else {
        report_type.to_string()
    }
}

fn location_or_unspecified(location: &str) -> &str {
    if location.trim().is_empty() {
        "Unspecified"
    } else {
        location
    }
}

fn description_or_placeholder(description: &str) -> &str {
    if description.trim().is_empty() {
        "No description provided."
    } else {
        description
    }
}
