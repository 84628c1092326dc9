//! Notification handlers: history listing and the sweep trigger.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use fintrack_entity::notification::Notification;

use crate::dto::response::{ApiResponse, SweepResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Notification>>>, ApiError> {
    let notifications = state.notification_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// POST /api/notifications/sweep
///
/// Triggers one sweep invocation. The response reports every alerted
/// payment and is successful regardless of individual mail failures.
pub async fn sweep(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<SweepResponse>>, ApiError> {
    let notified = state.sweep_service.run(Utc::now().date_naive()).await?;
    Ok(Json(ApiResponse::ok(SweepResponse { notified })))
}
