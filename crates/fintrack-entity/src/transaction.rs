//! Transaction entity model.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fintrack_core::types::{CategoryId, TransactionId, UserId};

/// The direction of a transaction.
///
/// Only `expense` rows count against budgets; income is never
/// budget-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl TransactionKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = fintrack_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(fintrack_core::AppError::validation(format!(
                "Invalid transaction kind: '{s}'. Expected one of: income, expense"
            ))),
        }
    }
}

/// A single financial transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    /// Unique transaction identifier.
    pub id: TransactionId,
    /// The owning user.
    pub user_id: UserId,
    /// The category this transaction belongs to.
    pub category_id: CategoryId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Free-form description.
    pub description: String,
    /// Amount; always non-negative, sign semantics come from `kind`.
    pub amount: Decimal,
    /// The date the transaction occurred.
    pub date: NaiveDate,
}

/// Field set for creating or fully overwriting a transaction.
///
/// Updates replace every field; there is no merge semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
    /// The category this transaction belongs to.
    pub category_id: CategoryId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Free-form description.
    pub description: String,
    /// Amount; must be non-negative.
    pub amount: Decimal,
    /// The date the transaction occurred.
    pub date: NaiveDate,
}

/// Aggregated total per category, as returned by the summary query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryTotal {
    /// Category name.
    pub category: String,
    /// Sum of transaction amounts in the category.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        assert_eq!("expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert_eq!("INCOME".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!(TransactionKind::Expense.to_string(), "expense");
    }

    #[test]
    fn test_kind_rejects_unknown() {
        assert!("transfer".parse::<TransactionKind>().is_err());
    }
}
