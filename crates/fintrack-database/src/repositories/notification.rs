//! Notification repository implementation.
//!
//! Notifications are append-only: rows are inserted by the sweep and
//! never updated or deleted.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use fintrack_core::error::{AppError, ErrorKind};
use fintrack_core::result::AppResult;
use fintrack_core::types::UserId;
use fintrack_entity::notification::{Notification, NotificationChannel};

/// Repository for the append-only notification audit log.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append a notification record and return the stored row.
    pub async fn create(
        &self,
        user_id: UserId,
        channel: NotificationChannel,
        message: &str,
        sent_at: DateTime<Utc>,
        exceeds_budget: bool,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, channel, message, sent_at, exceeds_budget) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(user_id)
        .bind(channel)
        .bind(message)
        .bind(sent_at)
        .bind(exceeds_budget)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
        })
    }

    /// List the user's notifications, newest first.
    pub async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY sent_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notifications", e))
    }
}
