//! Transaction CRUD with budget enforcement on creation.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use fintrack_core::error::AppError;
use fintrack_core::types::TransactionId;
use fintrack_database::repositories::budget::BudgetRepository;
use fintrack_database::repositories::category::CategoryRepository;
use fintrack_database::repositories::transaction::TransactionRepository;
use fintrack_entity::transaction::{
    CategoryTotal, Transaction, TransactionInput, TransactionKind,
};

use crate::context::RequestContext;
use crate::transaction::guard::{self, Verdict};

/// Orchestrates transaction persistence and the budget guard.
#[derive(Debug, Clone)]
pub struct TransactionService {
    /// Transaction repository.
    tx_repo: Arc<TransactionRepository>,
    /// Budget repository (active-budget lookups).
    budget_repo: Arc<BudgetRepository>,
    /// Category repository (referential checks).
    category_repo: Arc<CategoryRepository>,
}

impl TransactionService {
    /// Creates a new transaction service.
    pub fn new(
        tx_repo: Arc<TransactionRepository>,
        budget_repo: Arc<BudgetRepository>,
        category_repo: Arc<CategoryRepository>,
    ) -> Self {
        Self {
            tx_repo,
            budget_repo,
            category_repo,
        }
    }

    /// Creates a transaction for the current user, enforcing the budget.
    ///
    /// Expense creation is gated by the guard: the month-to-date expense
    /// sum for the category is recomputed from the store and compared
    /// against the active budget's ceiling. A rejection refuses the
    /// whole creation; nothing is written.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: TransactionInput,
    ) -> Result<Transaction, AppError> {
        self.check_amount(input.amount)?;
        let category = self
            .category_repo
            .find_by_id(input.category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        if input.kind == TransactionKind::Expense {
            let budget = self
                .budget_repo
                .find_active(ctx.user_id, input.category_id)
                .await?;

            if budget.is_some() {
                let today = Utc::now().date_naive();
                let month_to_date = self
                    .tx_repo
                    .expense_total_since(ctx.user_id, input.category_id, guard::month_start(today))
                    .await?;

                if let Verdict::Reject {
                    ceiling,
                    month_to_date,
                } = guard::evaluate(input.kind, budget.as_ref(), month_to_date, input.amount)
                {
                    info!(
                        user_id = %ctx.user_id,
                        category = %category.name,
                        ceiling = %ceiling,
                        month_to_date = %month_to_date,
                        attempted = %input.amount,
                        "Expense rejected by budget guard"
                    );
                    return Err(AppError::budget_exceeded(format!(
                        "Monthly budget for category '{}' exceeded: {:.2} of {:.2} already spent, attempted {:.2}",
                        category.name, month_to_date, ceiling, input.amount
                    )));
                }
            }
        }

        self.tx_repo.create(ctx.user_id, &input).await
    }

    /// Gets one of the user's transactions.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        id: TransactionId,
    ) -> Result<Transaction, AppError> {
        self.tx_repo
            .find_by_id(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Transaction not found"))
    }

    /// Lists the user's transactions.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Transaction>, AppError> {
        self.tx_repo.find_by_user(ctx.user_id).await
    }

    /// Fully overwrites one of the user's transactions.
    ///
    /// Updates are not re-evaluated by the guard; enforcement is bound
    /// to creation time.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: TransactionId,
        input: TransactionInput,
    ) -> Result<Transaction, AppError> {
        self.check_amount(input.amount)?;
        self.category_repo
            .find_by_id(input.category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        self.tx_repo
            .update(id, ctx.user_id, &input)
            .await?
            .ok_or_else(|| AppError::not_found("Transaction not found"))
    }

    /// Deletes one of the user's transactions.
    pub async fn delete(&self, ctx: &RequestContext, id: TransactionId) -> Result<(), AppError> {
        let deleted = self.tx_repo.delete(id, ctx.user_id).await?;
        if !deleted {
            return Err(AppError::not_found("Transaction not found"));
        }
        Ok(())
    }

    /// Per-category totals for the user's transactions.
    pub async fn summary(&self, ctx: &RequestContext) -> Result<Vec<CategoryTotal>, AppError> {
        self.tx_repo.totals_by_category(ctx.user_id).await
    }

    fn check_amount(&self, amount: Decimal) -> Result<(), AppError> {
        if amount < Decimal::ZERO {
            return Err(AppError::validation("Amount must not be negative"));
        }
        Ok(())
    }
}
