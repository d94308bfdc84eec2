//! Announcement entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reportdesk_core::{AppError, AppResult};

use crate::validation;

/// Maximum announcement title length.
pub const MAX_TITLE_LENGTH: usize = 200;

/// An announcement published by an admin to all residents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    /// Unique announcement identifier.
    #[sqlx(rename = "announcement_id")]
    pub id: i64,
    /// The authoring admin.
    pub admin_id: i64,
    /// Announcement title, at most 200 characters.
    pub title: String,
    /// Announcement body.
    pub content: String,
    /// When the announcement was published.
    pub created_at: DateTime<Utc>,
    /// When the announcement was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    /// Validate the announcement's required fields.
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(self.admin_id, &self.title, &self.content)
    }

    /// Return the content truncated for list previews.
    ///
    /// `max_length` counts characters, not bytes, so multibyte content
    /// never splits mid-character.
    pub fn truncated_content(&self, max_length: usize) -> String {
        if self.content.chars().count() <= max_length {
            return self.content.clone();
        }
        let truncated: String = self.content.chars().take(max_length).collect();
        format!("{truncated}...")
    }
}

/// Data required to publish a new announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnnouncement {
    /// The authoring admin's ID.
    pub admin_id: i64,
    /// Announcement title.
    pub title: String,
    /// Announcement body.
    pub content: String,
}

impl NewAnnouncement {
    /// Validate the announcement data.
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(self.admin_id, &self.title, &self.content)
    }
}

fn validate_fields(admin_id: i64, title: &str, content: &str) -> AppResult<()> {
    if admin_id <= 0 {
        return Err(AppError::validation("Announcement must have an author"));
    }
    if !validation::is_not_empty(title) {
        return Err(AppError::validation("Title is required"));
    }
    if !validation::is_valid_length(title, MAX_TITLE_LENGTH) {
        return Err(AppError::validation(
            "Title must be at most 200 characters",
        ));
    }
    if !validation::is_not_empty(content) {
        return Err(AppError::validation("Content is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_length_boundary() {
        let mut announcement = NewAnnouncement {
            admin_id: 1,
            title: "a".repeat(MAX_TITLE_LENGTH),
            content: "Water interruption on Saturday".to_string(),
        };
        assert!(announcement.validate().is_ok());

        announcement.title.push('a');
        assert!(announcement.validate().is_err());
    }

    #[test]
    fn test_truncated_content_counts_chars_not_bytes() {
        let now = Utc::now();
        let announcement = Announcement {
            id: 1,
            admin_id: 1,
            title: "Notice".to_string(),
            content: "Año nuevo block party".to_string(),
            created_at: now,
            updated_at: now,
        };
        // cutting inside the two-byte 'ñ' must not panic
        assert_eq!(announcement.truncated_content(2), "Añ...");
        assert_eq!(announcement.truncated_content(50), "Año nuevo block party");
    }

    #[test]
    fn test_rejects_missing_author_or_content() {
        let announcement = NewAnnouncement {
            admin_id: 0,
            title: "Notice".to_string(),
            content: "Body".to_string(),
        };
        assert!(announcement.validate().is_err());

        let announcement = NewAnnouncement {
            admin_id: 1,
            title: "Notice".to_string(),
            content: "  ".to_string(),
        };
        assert!(announcement.validate().is_err());
    }
}
