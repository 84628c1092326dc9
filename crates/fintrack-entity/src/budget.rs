//! Budget entity model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fintrack_core::types::{BudgetId, CategoryId, UserId};

/// A monthly spending ceiling for a (user, category) pair.
///
/// The schema permits more than one budget row per pair; enforcement
/// treats the row with the latest `created_on` (ties broken by highest
/// id) as the active budget.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Budget {
    /// Unique budget identifier.
    pub id: BudgetId,
    /// The owning user.
    pub user_id: UserId,
    /// The category this ceiling applies to.
    pub category_id: CategoryId,
    /// The monthly ceiling amount.
    pub amount: Decimal,
    /// The date the budget was created.
    pub created_on: NaiveDate,
    /// The date the budget expires.
    pub expires_on: NaiveDate,
}

/// Field set for creating or fully overwriting a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetInput {
    /// The category this ceiling applies to.
    pub category_id: CategoryId,
    /// The monthly ceiling amount.
    pub amount: Decimal,
    /// The date the budget was created.
    pub created_on: NaiveDate,
    /// The date the budget expires.
    pub expires_on: NaiveDate,
}
