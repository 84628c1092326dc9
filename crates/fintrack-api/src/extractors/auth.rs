//! `AuthUser` extractor: pulls the JWT from the Authorization header,
//! validates it, and resolves the subject.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use fintrack_core::error::AppError;
use fintrack_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(AppError::authentication("Missing Authorization header")))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError(AppError::authentication("Invalid Authorization header format"))
        })?;

        // Decode and validate JWT
        let claims = state.jwt_decoder.decode_token(token)?;

        // The token carries only the subject id; resolve the row so a
        // deleted user cannot keep acting on a still-valid token.
        let user = state
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| ApiError(AppError::authentication("Unknown subject")))?;

        Ok(AuthUser(RequestContext::new(user.id, user.email)))
    }
}
