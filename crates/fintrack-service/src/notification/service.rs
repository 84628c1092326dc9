//! Notification history lookups.

use std::sync::Arc;

use fintrack_core::error::AppError;
use fintrack_database::repositories::notification::NotificationRepository;
use fintrack_entity::notification::Notification;

use crate::context::RequestContext;

/// Read access to the notification audit log.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Lists notifications for the current user, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Notification>, AppError> {
        self.notification_repo.find_by_user(ctx.user_id).await
    }
}
