//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fintrack_core::types::CategoryId;

/// A spending category.
///
/// Categories are a shared reference dimension: they are not owned by
/// any user, and transactions, budgets, and payments all reference them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
}
