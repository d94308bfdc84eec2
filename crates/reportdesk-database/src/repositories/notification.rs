//! Notification repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use reportdesk_core::error::{AppError, ErrorKind};
use reportdesk_core::result::AppResult;
use reportdesk_entity::notification::{NewNotification, Notification, NotificationKind};

use crate::gateway::NotificationStore;

/// Repository for notification CRUD and read-state operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn create(&self, notification: &NewNotification) -> AppResult<Notification> {
        notification.validate()?;

        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, title, message, notification_type, related_id, is_read) \
             VALUES ($1, $2, $3, $4, $5, FALSE) RETURNING *",
        )
        .bind(notification.user_id)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.kind)
        .bind(notification.related_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE notification_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find notification by id", e)
        })
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })
    }

    async fn find_unread_by_user(&self, user_id: i64) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 AND is_read = FALSE \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unread notifications", e)
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list all notifications", e)
            })
    }

    async fn mark_read(&self, notification_id: i64) -> AppResult<bool> {
        // Postgres counts matched rows, so re-marking an already-read
        // notification still reports success.
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE, updated_at = NOW() \
             WHERE notification_id = $1",
        )
        .bind(notification_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark notification read", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    async fn mark_all_read_for_user(&self, user_id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE, updated_at = NOW() \
             WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark all notifications read", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    async fn unread_count(&self, user_id: i64) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count unread notifications", e)
        })
    }

    async fn create_for_all_users(
        &self,
        title: &str,
        message: &str,
        kind: NotificationKind,
        related_id: Option<i64>,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "INSERT INTO notifications (user_id, title, message, notification_type, related_id, is_read) \
             SELECT user_id, $1, $2, $3, $4, FALSE FROM users",
        )
        .bind(title)
        .bind(message)
        .bind(kind)
        .bind(related_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to create notifications for all users",
                e,
            )
        })?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE notification_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
