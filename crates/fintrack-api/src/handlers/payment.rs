//! One-off payment CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use fintrack_core::error::AppError;
use fintrack_core::types::PaymentId;
use fintrack_entity::payment::{Payment, PaymentInput};

use crate::dto::request::PaymentRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

impl From<PaymentRequest> for PaymentInput {
    fn from(req: PaymentRequest) -> Self {
        Self {
            category_id: req.category_id,
            description: req.description,
            amount: req.amount,
            paid_on: req.paid_on,
            method: req.method,
        }
    }
}

/// POST /api/payments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PaymentRequest>,
) -> Result<Json<ApiResponse<Payment>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let payment = state.payment_repo.create(auth.user_id, &req.into()).await?;
    Ok(Json(ApiResponse::ok(payment)))
}

/// GET /api/payments
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Payment>>>, ApiError> {
    let payments = state.payment_repo.find_by_user(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(payments)))
}

/// GET /api/payments/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<PaymentId>,
) -> Result<Json<ApiResponse<Payment>>, ApiError> {
    let payment = state
        .payment_repo
        .find_by_id(id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Payment not found"))?;
    Ok(Json(ApiResponse::ok(payment)))
}

/// PUT /api/payments/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<PaymentId>,
    Json(req): Json<PaymentRequest>,
) -> Result<Json<ApiResponse<Payment>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let payment = state
        .payment_repo
        .update(id, auth.user_id, &req.into())
        .await?
        .ok_or_else(|| AppError::not_found("Payment not found"))?;
    Ok(Json(ApiResponse::ok(payment)))
}

/// DELETE /api/payments/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<PaymentId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let deleted = state.payment_repo.delete(id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::not_found("Payment not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Payment deleted".to_string(),
    })))
}
