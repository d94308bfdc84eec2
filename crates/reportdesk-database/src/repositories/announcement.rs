//! Announcement repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use reportdesk_core::error::{AppError, ErrorKind};
use reportdesk_core::result::AppResult;
use reportdesk_entity::announcement::{Announcement, NewAnnouncement};

use crate::gateway::AnnouncementStore;

/// Repository for announcement CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AnnouncementRepository {
    pool: PgPool,
}

impl AnnouncementRepository {
    /// Create a new announcement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementStore for AnnouncementRepository {
    async fn create(&self, announcement: &NewAnnouncement) -> AppResult<Announcement> {
        announcement.validate()?;

        sqlx::query_as::<_, Announcement>(
            "INSERT INTO announcements (admin_id, title, content) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(announcement.admin_id)
        .bind(&announcement.title)
        .bind(&announcement.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create announcement", e)
        })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Announcement>> {
        sqlx::query_as::<_, Announcement>("SELECT * FROM announcements WHERE announcement_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find announcement by id", e)
            })
    }

    async fn find_all(&self) -> AppResult<Vec<Announcement>> {
        sqlx::query_as::<_, Announcement>("SELECT * FROM announcements ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list announcements", e)
            })
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Announcement>> {
        sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent announcements", e)
        })
    }

    async fn find_by_admin(&self, admin_id: i64) -> AppResult<Vec<Announcement>> {
        sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements WHERE admin_id = $1 ORDER BY created_at DESC",
        )
        .bind(admin_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list announcements by admin",
                e,
            )
        })
    }

    async fn update(&self, announcement: &Announcement) -> AppResult<Announcement> {
        if announcement.id <= 0 {
            return Err(AppError::validation("Announcement id must be positive"));
        }
        announcement.validate()?;

        let result = sqlx::query(
            "UPDATE announcements SET admin_id = $1, title = $2, content = $3, \
             updated_at = NOW() WHERE announcement_id = $4",
        )
        .bind(announcement.admin_id)
        .bind(&announcement.title)
        .bind(&announcement.content)
        .bind(announcement.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update announcement", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Announcement not found"));
        }

        Ok(announcement.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM announcements WHERE announcement_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete announcement", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM announcements")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count announcements", e)
            })
    }
}
