//! Request DTOs with validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use fintrack_core::types::CategoryId;
use fintrack_entity::transaction::TransactionKind;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password; policy is enforced server-side.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create-or-overwrite category request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    /// Category name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Create-or-overwrite transaction request.
///
/// Updates replace every field; there is no merge semantics.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransactionRequest {
    /// Category reference.
    pub category_id: CategoryId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Free-form description.
    #[validate(length(max = 255))]
    pub description: String,
    /// Amount; must be non-negative.
    pub amount: Decimal,
    /// Transaction date.
    pub date: NaiveDate,
}

/// Create-or-overwrite budget request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRequest {
    /// Category reference.
    pub category_id: CategoryId,
    /// Monthly ceiling amount.
    pub amount: Decimal,
    /// Budget creation date.
    pub created_on: NaiveDate,
    /// Budget expiry date.
    pub expires_on: NaiveDate,
}

/// Create-or-overwrite fixed payment request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FixedPaymentRequest {
    /// Category reference.
    pub category_id: CategoryId,
    /// Free-form description.
    #[validate(length(max = 255))]
    pub description: String,
    /// Amount due per occurrence.
    pub amount: Decimal,
    /// Start date of the obligation.
    pub starts_on: NaiveDate,
    /// Whether the obligation is active.
    pub active: bool,
}

/// Create-or-overwrite payment request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentRequest {
    /// Category reference, if any.
    pub category_id: Option<CategoryId>,
    /// Free-form description.
    #[validate(length(max = 255))]
    pub description: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Payment date.
    pub paid_on: NaiveDate,
    /// Payment method, if recorded.
    #[validate(length(max = 100))]
    pub method: Option<String>,
}
