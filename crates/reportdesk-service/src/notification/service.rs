//! Notification read-state management.
//!
//! The read-state machine is one-directional: Unread → Read. The entity
//! model can represent an unread toggle, but no `mark_as_unread` is
//! exposed here; the asymmetry is intentional.

use std::sync::Arc;

use tracing::info;

use reportdesk_core::result::AppResult;
use reportdesk_database::gateway::NotificationStore;
use reportdesk_entity::notification::Notification;

/// Manages a user's notification inbox.
#[derive(Clone)]
pub struct NotificationService {
    /// Notification gateway.
    notifications: Arc<dyn NotificationStore>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notifications: Arc<dyn NotificationStore>) -> Self {
        Self { notifications }
    }

    /// Lists a user's notifications, newest first.
    pub async fn list_for_user(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        self.notifications.find_by_user(user_id).await
    }

    /// Lists a user's unread notifications, newest first.
    pub async fn list_unread_for_user(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        self.notifications.find_unread_by_user(user_id).await
    }

    /// Gets the unread notification count, used for the badge display and
    /// as the gate that avoids redundant "already read" prompts.
    pub async fn unread_count(&self, user_id: i64) -> AppResult<i64> {
        self.notifications.unread_count(user_id).await
    }

    /// Marks a notification as read.
    ///
    /// Idempotent: marking an already-read notification is a no-op
    /// success, not an error.
    pub async fn mark_as_read(&self, notification_id: i64) -> AppResult<bool> {
        self.notifications.mark_read(notification_id).await
    }

    /// Marks all of a user's notifications as read.
    ///
    /// Returns `true` iff at least one row changed. `false` means the user
    /// had no unread notifications; nothing to do, not an error.
    pub async fn mark_all_as_read_for_user(&self, user_id: i64) -> AppResult<bool> {
        let changed = self.notifications.mark_all_read_for_user(user_id).await?;
        if changed {
            info!(user_id, "Marked all notifications read");
        }
        Ok(changed)
    }

    /// Deletes a notification from the owner's inbox.
    pub async fn delete(&self, notification_id: i64) -> AppResult<bool> {
        self.notifications.delete(notification_id).await
    }
}
