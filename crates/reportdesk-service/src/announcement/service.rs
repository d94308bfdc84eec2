//! Announcement publishing and management.

use std::sync::Arc;

use tracing::info;

use reportdesk_core::result::AppResult;
use reportdesk_database::gateway::AnnouncementStore;
use reportdesk_entity::announcement::{Announcement, NewAnnouncement};

use crate::notification::NotificationFanout;

/// Handles admin announcements.
#[derive(Clone)]
pub struct AnnouncementService {
    /// Announcement gateway.
    announcements: Arc<dyn AnnouncementStore>,
    /// Fanout service for publication events.
    fanout: NotificationFanout,
}

impl AnnouncementService {
    /// Creates a new announcement service.
    pub fn new(announcements: Arc<dyn AnnouncementStore>, fanout: NotificationFanout) -> Self {
        Self {
            announcements,
            fanout,
        }
    }

    /// Publishes a new announcement and notifies every resident.
    ///
    /// A fanout failure surfaces to the caller; the announcement itself
    /// stays created (best-effort two-step, no wrapping transaction).
    pub async fn publish(&self, draft: NewAnnouncement) -> AppResult<Announcement> {
        draft.validate()?;

        let announcement = self.announcements.create(&draft).await?;
        info!(
            announcement_id = announcement.id,
            admin_id = announcement.admin_id,
            "Announcement published"
        );

        self.fanout.announcement_published(&announcement).await?;
        Ok(announcement)
    }

    /// Edits an existing announcement. Editing does not re-notify.
    pub async fn edit(&self, announcement: &Announcement) -> AppResult<Announcement> {
        let updated = self.announcements.update(announcement).await?;
        info!(announcement_id = announcement.id, "Announcement edited");
        Ok(updated)
    }

    /// Deletes an announcement.
    pub async fn delete(&self, announcement_id: i64) -> AppResult<bool> {
        self.announcements.delete(announcement_id).await
    }

    /// Finds an announcement by id.
    pub async fn find(&self, announcement_id: i64) -> AppResult<Option<Announcement>> {
        self.announcements.find_by_id(announcement_id).await
    }

    /// Lists every announcement, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<Announcement>> {
        self.announcements.find_all().await
    }

    /// Lists the most recent announcements.
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<Announcement>> {
        self.announcements.find_recent(limit).await
    }

    /// Lists an admin's announcements, newest first.
    pub async fn list_by_admin(&self, admin_id: i64) -> AppResult<Vec<Announcement>> {
        self.announcements.find_by_admin(admin_id).await
    }

    /// Counts all announcements.
    pub async fn count(&self) -> AppResult<i64> {
        self.announcements.count().await
    }
}
