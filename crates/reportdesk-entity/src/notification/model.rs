//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reportdesk_core::{AppError, AppResult};

use super::kind::NotificationKind;
use crate::validation;

/// A notification delivered to a single user.
///
/// Rows are created exclusively by the fanout service in response to a
/// domain event, mutated only by read toggling, and deleted explicitly by
/// the owning user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    #[sqlx(rename = "notification_id")]
    pub id: i64,
    /// The recipient user.
    pub user_id: i64,
    /// Short title, at most 200 characters.
    pub title: String,
    /// Message body.
    pub message: String,
    /// What the notification is about.
    #[sqlx(rename = "notification_type")]
    pub kind: NotificationKind,
    /// The originating report or announcement, if any. No referential
    /// integrity is enforced on this field.
    pub related_id: Option<i64>,
    /// Whether the recipient has read this notification.
    pub is_read: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// When the notification was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification is still unread.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }

    /// Validate the notification's required fields.
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(self.user_id, &self.title, &self.message)
    }

    /// Return the message truncated for list previews.
    ///
    /// `max_length` counts characters, not bytes, so multibyte content
    /// never splits mid-character.
    pub fn truncated_message(&self, max_length: usize) -> String {
        if self.message.chars().count() <= max_length {
            return self.message.clone();
        }
        let truncated: String = self.message.chars().take(max_length).collect();
        format!("{truncated}...")
    }
}

/// Data required to materialize a new notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    /// The recipient user's ID.
    pub user_id: i64,
    /// Short title.
    pub title: String,
    /// Message body.
    pub message: String,
    /// What the notification is about.
    pub kind: NotificationKind,
    /// The originating report or announcement, if any.
    pub related_id: Option<i64>,
}

impl NewNotification {
    /// Validate the notification data.
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(self.user_id, &self.title, &self.message)
    }
}

fn validate_fields(user_id: i64, title: &str, message: &str) -> AppResult<()> {
    if user_id <= 0 {
        return Err(AppError::validation("Notification must have a recipient"));
    }
    if !validation::is_not_empty(title) {
        return Err(AppError::validation("Title is required"));
    }
    if !validation::is_valid_length(title, 200) {
        return Err(AppError::validation(
            "Title must be at most 200 characters",
        ));
    }
    if !validation::is_not_empty(message) {
        return Err(AppError::validation("Message is required"));
    }
    Ok(())
}
