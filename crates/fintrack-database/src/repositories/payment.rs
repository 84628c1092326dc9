//! One-off payment repository implementation.

use sqlx::PgPool;

use fintrack_core::error::{AppError, ErrorKind};
use fintrack_core::result::AppResult;
use fintrack_core::types::{PaymentId, UserId};
use fintrack_entity::payment::{Payment, PaymentInput};

/// Repository for payment CRUD.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Create a new payment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new payment for the given user and return the stored row.
    pub async fn create(&self, user_id: UserId, input: &PaymentInput) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (user_id, category_id, description, amount, paid_on, method) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(user_id)
        .bind(input.category_id)
        .bind(&input.description)
        .bind(input.amount)
        .bind(input.paid_on)
        .bind(&input.method)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create payment", e))
    }

    /// Find one of the user's payments by primary key.
    pub async fn find_by_id(&self, id: PaymentId, user_id: UserId) -> AppResult<Option<Payment>> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find payment", e))
    }

    /// List all of the user's payments, newest first.
    pub async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Payment>> {
        sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE user_id = $1 ORDER BY paid_on DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list payments", e))
    }

    /// Overwrite every field of one of the user's payments.
    /// Returns `None` when the scoped row is absent.
    pub async fn update(
        &self,
        id: PaymentId,
        user_id: UserId,
        input: &PaymentInput,
    ) -> AppResult<Option<Payment>> {
        sqlx::query_as::<_, Payment>(
            "UPDATE payments \
             SET category_id = $1, description = $2, amount = $3, paid_on = $4, method = $5 \
             WHERE id = $6 AND user_id = $7 RETURNING *",
        )
        .bind(input.category_id)
        .bind(&input.description)
        .bind(input.amount)
        .bind(input.paid_on)
        .bind(&input.method)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update payment", e))
    }

    /// Delete one of the user's payments. Returns `true` if a row was removed.
    pub async fn delete(&self, id: PaymentId, user_id: UserId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete payment", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
