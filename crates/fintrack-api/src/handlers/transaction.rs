//! Transaction handlers. Creation routes through the budget guard.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use fintrack_core::error::AppError;
use fintrack_core::types::TransactionId;
use fintrack_entity::transaction::{CategoryTotal, Transaction, TransactionInput};

use crate::dto::request::TransactionRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

impl From<TransactionRequest> for TransactionInput {
    fn from(req: TransactionRequest) -> Self {
        Self {
            category_id: req.category_id,
            kind: req.kind,
            description: req.description,
            amount: req.amount,
            date: req.date,
        }
    }
}

/// POST /api/transactions
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<TransactionRequest>,
) -> Result<Json<ApiResponse<Transaction>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let transaction = state
        .transaction_service
        .create(&auth, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(transaction)))
}

/// GET /api/transactions
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Transaction>>>, ApiError> {
    let transactions = state.transaction_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(transactions)))
}

/// GET /api/transactions/summary
pub async fn summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<CategoryTotal>>>, ApiError> {
    let totals = state.transaction_service.summary(&auth).await?;
    Ok(Json(ApiResponse::ok(totals)))
}

/// GET /api/transactions/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<TransactionId>,
) -> Result<Json<ApiResponse<Transaction>>, ApiError> {
    let transaction = state.transaction_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(transaction)))
}

/// PUT /api/transactions/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<TransactionId>,
    Json(req): Json<TransactionRequest>,
) -> Result<Json<ApiResponse<Transaction>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let transaction = state
        .transaction_service
        .update(&auth, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(transaction)))
}

/// DELETE /api/transactions/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<TransactionId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.transaction_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Transaction deleted".to_string(),
    })))
}
