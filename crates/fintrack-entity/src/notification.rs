//! Notification entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fintrack_core::types::{NotificationId, UserId};

/// Delivery channel for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_channel", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    /// Delivered via the mail transport.
    Email,
    /// Reserved; no SMS transport is wired up.
    Sms,
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Sms => write!(f, "sms"),
        }
    }
}

/// An append-only audit record of a sweep alert.
///
/// Rows are created solely by the notification sweep and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The recipient user.
    pub user_id: UserId,
    /// Delivery channel.
    pub channel: NotificationChannel,
    /// Message body that was dispatched.
    pub message: String,
    /// When the alert was recorded.
    pub sent_at: DateTime<Utc>,
    /// Whether the alert was raised because a budget was exceeded.
    pub exceeds_budget: bool,
}
