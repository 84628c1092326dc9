//! Fixed payment CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use fintrack_core::error::AppError;
use fintrack_core::types::FixedPaymentId;
use fintrack_entity::fixed_payment::{FixedPayment, FixedPaymentInput};

use crate::dto::request::FixedPaymentRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

impl From<FixedPaymentRequest> for FixedPaymentInput {
    fn from(req: FixedPaymentRequest) -> Self {
        Self {
            category_id: req.category_id,
            description: req.description,
            amount: req.amount,
            starts_on: req.starts_on,
            active: req.active,
        }
    }
}

/// POST /api/fixed-payments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<FixedPaymentRequest>,
) -> Result<Json<ApiResponse<FixedPayment>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let payment = state
        .fixed_payment_repo
        .create(auth.user_id, &req.into())
        .await?;
    Ok(Json(ApiResponse::ok(payment)))
}

/// GET /api/fixed-payments
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<FixedPayment>>>, ApiError> {
    let payments = state.fixed_payment_repo.find_by_user(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(payments)))
}

/// GET /api/fixed-payments/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FixedPaymentId>,
) -> Result<Json<ApiResponse<FixedPayment>>, ApiError> {
    let payment = state
        .fixed_payment_repo
        .find_by_id(id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Fixed payment not found"))?;
    Ok(Json(ApiResponse::ok(payment)))
}

/// PUT /api/fixed-payments/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FixedPaymentId>,
    Json(req): Json<FixedPaymentRequest>,
) -> Result<Json<ApiResponse<FixedPayment>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let payment = state
        .fixed_payment_repo
        .update(id, auth.user_id, &req.into())
        .await?
        .ok_or_else(|| AppError::not_found("Fixed payment not found"))?;
    Ok(Json(ApiResponse::ok(payment)))
}

/// DELETE /api/fixed-payments/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<FixedPaymentId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let deleted = state.fixed_payment_repo.delete(id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::not_found("Fixed payment not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Fixed payment deleted".to_string(),
    })))
}
