//! Transaction repository implementation.
//!
//! Besides CRUD, this repository carries the aggregation queries the
//! budget guard and the category summary endpoint are built on. Sums are
//! computed in SQL over `NUMERIC` so money arithmetic stays exact.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use fintrack_core::error::{AppError, ErrorKind};
use fintrack_core::result::AppResult;
use fintrack_core::types::{CategoryId, TransactionId, UserId};
use fintrack_entity::transaction::{CategoryTotal, Transaction, TransactionInput};

/// Repository for transaction CRUD and aggregation queries.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    /// Create a new transaction repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new transaction for the given user and return the stored row.
    pub async fn create(
        &self,
        user_id: UserId,
        input: &TransactionInput,
    ) -> AppResult<Transaction> {
        sqlx::query_as::<_, Transaction>(
            "INSERT INTO transactions (user_id, category_id, kind, description, amount, date) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(user_id)
        .bind(input.category_id)
        .bind(input.kind)
        .bind(&input.description)
        .bind(input.amount)
        .bind(input.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create transaction", e))
    }

    /// Find one of the user's transactions by primary key.
    pub async fn find_by_id(
        &self,
        id: TransactionId,
        user_id: UserId,
    ) -> AppResult<Option<Transaction>> {
        sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find transaction", e))
    }

    /// List all of the user's transactions, newest first.
    pub async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Transaction>> {
        sqlx::query_as::<_, Transaction>(
            "SELECT * FROM transactions WHERE user_id = $1 ORDER BY date DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list transactions", e))
    }

    /// Overwrite every field of one of the user's transactions.
    /// Returns `None` when the scoped row is absent.
    pub async fn update(
        &self,
        id: TransactionId,
        user_id: UserId,
        input: &TransactionInput,
    ) -> AppResult<Option<Transaction>> {
        sqlx::query_as::<_, Transaction>(
            "UPDATE transactions \
             SET category_id = $1, kind = $2, description = $3, amount = $4, date = $5 \
             WHERE id = $6 AND user_id = $7 RETURNING *",
        )
        .bind(input.category_id)
        .bind(input.kind)
        .bind(&input.description)
        .bind(input.amount)
        .bind(input.date)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update transaction", e))
    }

    /// Delete one of the user's transactions. Returns `true` if a row was removed.
    pub async fn delete(&self, id: TransactionId, user_id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete transaction", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Sum the user's expense amounts in a category since the given date.
    ///
    /// This is the month-to-date aggregate the budget guard evaluates
    /// against; it is recomputed from the store on every call.
    pub async fn expense_total_since(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        since: NaiveDate,
    ) -> AppResult<Decimal> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(amount), 0) FROM transactions \
             WHERE user_id = $1 AND category_id = $2 AND kind = 'expense' AND date >= $3",
        )
        .bind(user_id)
        .bind(category_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum expenses", e))
    }

    /// Total transaction amounts per category for the user.
    pub async fn totals_by_category(&self, user_id: UserId) -> AppResult<Vec<CategoryTotal>> {
        sqlx::query_as::<_, CategoryTotal>(
            "SELECT c.name AS category, COALESCE(SUM(t.amount), 0) AS total \
             FROM categories c \
             JOIN transactions t ON t.category_id = c.id \
             WHERE t.user_id = $1 \
             GROUP BY c.name \
             ORDER BY c.name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to total by category", e)
        })
    }
}
