//! Category CRUD handlers.
//!
//! Categories are a shared reference dimension: any authenticated user
//! may read or modify them.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use fintrack_core::error::AppError;
use fintrack_core::types::CategoryId;
use fintrack_entity::category::Category;

use crate::dto::request::CategoryRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.category_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let category = state.category_repo.create(&req.name).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// GET /api/categories/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<CategoryId>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state
        .category_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;
    Ok(Json(ApiResponse::ok(category)))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<CategoryId>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let category = state
        .category_repo
        .update(id, &req.name)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;
    Ok(Json(ApiResponse::ok(category)))
}

/// DELETE /api/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<CategoryId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let deleted = state.category_repo.delete(id).await?;
    if !deleted {
        return Err(AppError::not_found("Category not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Category deleted".to_string(),
    })))
}
