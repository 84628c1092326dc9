//! Budget CRUD handlers.
//!
//! Ownership-scoped: every operation is filtered by the authenticated
//! subject, including reads.

use axum::Json;
use axum::extract::{Path, State};

use fintrack_core::error::AppError;
use fintrack_core::types::BudgetId;
use fintrack_entity::budget::{Budget, BudgetInput};

use crate::dto::request::BudgetRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

impl From<BudgetRequest> for BudgetInput {
    fn from(req: BudgetRequest) -> Self {
        Self {
            category_id: req.category_id,
            amount: req.amount,
            created_on: req.created_on,
            expires_on: req.expires_on,
        }
    }
}

/// POST /api/budgets
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<BudgetRequest>,
) -> Result<Json<ApiResponse<Budget>>, ApiError> {
    let budget = state.budget_repo.create(auth.user_id, &req.into()).await?;
    Ok(Json(ApiResponse::ok(budget)))
}

/// GET /api/budgets
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Budget>>>, ApiError> {
    let budgets = state.budget_repo.find_by_user(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(budgets)))
}

/// GET /api/budgets/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<BudgetId>,
) -> Result<Json<ApiResponse<Budget>>, ApiError> {
    let budget = state
        .budget_repo
        .find_by_id(id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Budget not found"))?;
    Ok(Json(ApiResponse::ok(budget)))
}

/// PUT /api/budgets/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<BudgetId>,
    Json(req): Json<BudgetRequest>,
) -> Result<Json<ApiResponse<Budget>>, ApiError> {
    let budget = state
        .budget_repo
        .update(id, auth.user_id, &req.into())
        .await?
        .ok_or_else(|| AppError::not_found("Budget not found"))?;
    Ok(Json(ApiResponse::ok(budget)))
}

/// DELETE /api/budgets/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<BudgetId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let deleted = state.budget_repo.delete(id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::not_found("Budget not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Budget deleted".to_string(),
    })))
}
