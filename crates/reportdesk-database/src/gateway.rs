//! Persistence gateway trait contracts.
//!
//! The service layer depends on these traits rather than on the concrete
//! Postgres repositories, so that business logic can be exercised against
//! test doubles. Implementations wrap every storage error into
//! [`reportdesk_core::AppError`] at this boundary; `create` fails when the
//! entity fails local validation or the write affects zero rows, and
//! `update` additionally fails when the id is not positive.
//!
//! All listing operations return rows ordered by creation time, most
//! recent first. Ties are broken by storage-native insertion order.

use async_trait::async_trait;

use reportdesk_core::AppResult;
use reportdesk_entity::announcement::{Announcement, NewAnnouncement};
use reportdesk_entity::notification::{NewNotification, Notification, NotificationKind};
use reportdesk_entity::report::{NewReport, Report, ReportStatus};
use reportdesk_entity::user::{CreateUser, User, UserRole};

/// Gateway for user rows.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a new user and return it with its generated id.
    async fn create(&self, user: &CreateUser) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by username and plaintext password.
    ///
    /// Plaintext comparison, a known weakness kept for compatibility with
    /// existing account data.
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>>;

    /// List all users, newest first.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// List users with the given role, newest first.
    async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;

    /// Update an existing user.
    async fn update(&self, user: &User) -> AppResult<User>;

    /// Replace a user's password. Returns `true` if a row changed.
    async fn update_password(&self, user_id: i64, new_password: &str) -> AppResult<bool>;

    /// Delete a user. Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Count all users.
    async fn count(&self) -> AppResult<i64>;
}

/// Gateway for report rows.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Create a new report with status forced to Pending.
    async fn create(&self, report: &NewReport) -> AppResult<Report>;

    /// Find a report by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Report>>;

    /// List all reports, newest first.
    async fn find_all(&self) -> AppResult<Vec<Report>>;

    /// List a resident's reports, newest first.
    async fn find_by_resident(&self, resident_id: i64) -> AppResult<Vec<Report>>;

    /// List reports with the given status, newest first.
    async fn find_by_status(&self, status: ReportStatus) -> AppResult<Vec<Report>>;

    /// Update an existing report.
    async fn update(&self, report: &Report) -> AppResult<Report>;

    /// Set a report's status. Returns `true` if a row changed.
    async fn update_status(&self, report_id: i64, status: ReportStatus) -> AppResult<bool>;

    /// Delete a report. Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Count reports with the given status.
    async fn count_by_status(&self, status: ReportStatus) -> AppResult<i64>;
}

/// Gateway for announcement rows.
#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    /// Create a new announcement and return it with its generated id.
    async fn create(&self, announcement: &NewAnnouncement) -> AppResult<Announcement>;

    /// Find an announcement by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Announcement>>;

    /// List all announcements, newest first.
    async fn find_all(&self) -> AppResult<Vec<Announcement>>;

    /// List the most recent announcements.
    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Announcement>>;

    /// List an admin's announcements, newest first.
    async fn find_by_admin(&self, admin_id: i64) -> AppResult<Vec<Announcement>>;

    /// Update an existing announcement.
    async fn update(&self, announcement: &Announcement) -> AppResult<Announcement>;

    /// Delete an announcement. Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Count all announcements.
    async fn count(&self) -> AppResult<i64>;
}

/// Gateway for notification rows.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Create a new notification and return it with its generated id.
    async fn create(&self, notification: &NewNotification) -> AppResult<Notification>;

    /// Find a notification by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Notification>>;

    /// List a user's notifications, newest first.
    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Notification>>;

    /// List a user's unread notifications, newest first.
    async fn find_unread_by_user(&self, user_id: i64) -> AppResult<Vec<Notification>>;

    /// List all notifications, newest first.
    async fn find_all(&self) -> AppResult<Vec<Notification>>;

    /// Mark a notification as read. Idempotent: marking an already-read
    /// notification succeeds again. Returns `true` while the row exists.
    async fn mark_read(&self, notification_id: i64) -> AppResult<bool>;

    /// Mark all of a user's unread notifications as read. Returns `true`
    /// iff at least one row changed; `false` means there was nothing to do.
    async fn mark_all_read_for_user(&self, user_id: i64) -> AppResult<bool>;

    /// Count a user's unread notifications.
    async fn unread_count(&self, user_id: i64) -> AppResult<i64>;

    /// Create one notification per existing user in a single batched
    /// insert.
    async fn create_for_all_users(
        &self,
        title: &str,
        message: &str,
        kind: NotificationKind,
        related_id: Option<i64>,
    ) -> AppResult<u64>;

    /// Delete a notification. Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
