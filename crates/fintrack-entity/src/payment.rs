//! One-off payment entity model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fintrack_core::types::{CategoryId, PaymentId, UserId};

/// A one-off payment record. Record-only; no business rule attached.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: PaymentId,
    /// The owning user.
    pub user_id: UserId,
    /// The category, if any.
    pub category_id: Option<CategoryId>,
    /// Free-form description.
    pub description: String,
    /// Amount paid.
    pub amount: Decimal,
    /// The date the payment was made.
    pub paid_on: NaiveDate,
    /// Payment method, if recorded.
    pub method: Option<String>,
}

/// Field set for creating or fully overwriting a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    /// The category, if any.
    pub category_id: Option<CategoryId>,
    /// Free-form description.
    pub description: String,
    /// Amount paid.
    pub amount: Decimal,
    /// The date the payment was made.
    pub paid_on: NaiveDate,
    /// Payment method, if recorded.
    pub method: Option<String>,
}
