//! Fixed payment repository implementation.

use chrono::NaiveDate;
use sqlx::PgPool;

use fintrack_core::error::{AppError, ErrorKind};
use fintrack_core::result::AppResult;
use fintrack_core::types::{FixedPaymentId, UserId};
use fintrack_entity::fixed_payment::{FixedPayment, FixedPaymentInput};

/// Repository for fixed payment CRUD and sweep candidate selection.
#[derive(Debug, Clone)]
pub struct FixedPaymentRepository {
    pool: PgPool,
}

impl FixedPaymentRepository {
    /// Create a new fixed payment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new fixed payment for the given user and return the stored row.
    pub async fn create(
        &self,
        user_id: UserId,
        input: &FixedPaymentInput,
    ) -> AppResult<FixedPayment> {
        sqlx::query_as::<_, FixedPayment>(
            "INSERT INTO fixed_payments (user_id, category_id, description, amount, starts_on, active) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(user_id)
        .bind(input.category_id)
        .bind(&input.description)
        .bind(input.amount)
        .bind(input.starts_on)
        .bind(input.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create fixed payment", e)
        })
    }

    /// Find one of the user's fixed payments by primary key.
    pub async fn find_by_id(
        &self,
        id: FixedPaymentId,
        user_id: UserId,
    ) -> AppResult<Option<FixedPayment>> {
        sqlx::query_as::<_, FixedPayment>(
            "SELECT * FROM fixed_payments WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find fixed payment", e))
    }

    /// List all of the user's fixed payments.
    pub async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<FixedPayment>> {
        sqlx::query_as::<_, FixedPayment>(
            "SELECT * FROM fixed_payments WHERE user_id = $1 ORDER BY starts_on, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list fixed payments", e))
    }

    /// List active fixed payments across all users due on or before `cutoff`.
    ///
    /// These are the notification sweep's candidates.
    pub async fn find_due(&self, cutoff: NaiveDate) -> AppResult<Vec<FixedPayment>> {
        sqlx::query_as::<_, FixedPayment>(
            "SELECT * FROM fixed_payments WHERE active = TRUE AND starts_on <= $1 ORDER BY id",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list due payments", e))
    }

    /// Overwrite every field of one of the user's fixed payments.
    /// Returns `None` when the scoped row is absent.
    pub async fn update(
        &self,
        id: FixedPaymentId,
        user_id: UserId,
        input: &FixedPaymentInput,
    ) -> AppResult<Option<FixedPayment>> {
        sqlx::query_as::<_, FixedPayment>(
            "UPDATE fixed_payments \
             SET category_id = $1, description = $2, amount = $3, starts_on = $4, active = $5 \
             WHERE id = $6 AND user_id = $7 RETURNING *",
        )
        .bind(input.category_id)
        .bind(&input.description)
        .bind(input.amount)
        .bind(input.starts_on)
        .bind(input.active)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update fixed payment", e)
        })
    }

    /// Delete one of the user's fixed payments. Returns `true` if a row was removed.
    pub async fn delete(&self, id: FixedPaymentId, user_id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM fixed_payments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete fixed payment", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
