//! Fixed payment entity model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fintrack_core::types::{CategoryId, FixedPaymentId, UserId};

/// A recurring payment obligation.
///
/// Inactive rows are excluded from the notification sweep.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FixedPayment {
    /// Unique fixed payment identifier.
    pub id: FixedPaymentId,
    /// The owning user.
    pub user_id: UserId,
    /// The category this obligation belongs to.
    pub category_id: CategoryId,
    /// Free-form description.
    pub description: String,
    /// Amount due per occurrence.
    pub amount: Decimal,
    /// The date the obligation starts.
    pub starts_on: NaiveDate,
    /// Whether the obligation is currently active.
    pub active: bool,
}

/// Field set for creating or fully overwriting a fixed payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedPaymentInput {
    /// The category this obligation belongs to.
    pub category_id: CategoryId,
    /// Free-form description.
    pub description: String,
    /// Amount due per occurrence.
    pub amount: Decimal,
    /// The date the obligation starts.
    pub starts_on: NaiveDate,
    /// Whether the obligation is currently active.
    pub active: bool,
}
