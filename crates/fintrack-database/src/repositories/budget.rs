//! Budget repository implementation.

use sqlx::PgPool;

use fintrack_core::error::{AppError, ErrorKind};
use fintrack_core::result::AppResult;
use fintrack_core::types::{BudgetId, CategoryId, UserId};
use fintrack_entity::budget::{Budget, BudgetInput};

/// Repository for budget CRUD and active-budget selection.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    pool: PgPool,
}

impl BudgetRepository {
    /// Create a new budget repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new budget for the given user and return the stored row.
    pub async fn create(&self, user_id: UserId, input: &BudgetInput) -> AppResult<Budget> {
        sqlx::query_as::<_, Budget>(
            "INSERT INTO budgets (user_id, category_id, amount, created_on, expires_on) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(user_id)
        .bind(input.category_id)
        .bind(input.amount)
        .bind(input.created_on)
        .bind(input.expires_on)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create budget", e))
    }

    /// Find one of the user's budgets by primary key.
    pub async fn find_by_id(&self, id: BudgetId, user_id: UserId) -> AppResult<Option<Budget>> {
        sqlx::query_as::<_, Budget>("SELECT * FROM budgets WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find budget", e))
    }

    /// List all of the user's budgets.
    pub async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Budget>> {
        sqlx::query_as::<_, Budget>(
            "SELECT * FROM budgets WHERE user_id = $1 ORDER BY created_on DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list budgets", e))
    }

    /// List every budget row, unscoped.
    ///
    /// The notification sweep cross-references payments of all users
    /// against this set.
    pub async fn find_all(&self) -> AppResult<Vec<Budget>> {
        sqlx::query_as::<_, Budget>("SELECT * FROM budgets ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list all budgets", e))
    }

    /// Select the active budget for a (user, category) pair.
    ///
    /// The schema allows several rows per pair; the authoritative one is
    /// the latest `created_on`, ties broken by highest id.
    pub async fn find_active(
        &self,
        user_id: UserId,
        category_id: CategoryId,
    ) -> AppResult<Option<Budget>> {
        sqlx::query_as::<_, Budget>(
            "SELECT * FROM budgets WHERE user_id = $1 AND category_id = $2 \
             ORDER BY created_on DESC, id DESC LIMIT 1",
        )
        .bind(user_id)
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find active budget", e)
        })
    }

    /// Overwrite every field of one of the user's budgets.
    /// Returns `None` when the scoped row is absent.
    pub async fn update(
        &self,
        id: BudgetId,
        user_id: UserId,
        input: &BudgetInput,
    ) -> AppResult<Option<Budget>> {
        sqlx::query_as::<_, Budget>(
            "UPDATE budgets \
             SET category_id = $1, amount = $2, created_on = $3, expires_on = $4 \
             WHERE id = $5 AND user_id = $6 RETURNING *",
        )
        .bind(input.category_id)
        .bind(input.amount)
        .bind(input.created_on)
        .bind(input.expires_on)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update budget", e))
    }

    /// Delete one of the user's budgets. Returns `true` if a row was removed.
    pub async fn delete(&self, id: BudgetId, user_id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM budgets WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete budget", e))?;
        Ok(result.rows_affected() > 0)
    }
}
