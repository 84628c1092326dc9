//! Registration, login, and profile lookup.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use fintrack_auth::jwt::encoder::JwtEncoder;
use fintrack_auth::password::{PasswordHasher, PasswordValidator};
use fintrack_core::error::AppError;
use fintrack_database::repositories::user::UserRepository;
use fintrack_entity::user::{NewUser, User};

use crate::context::RequestContext;

/// Handles account lifecycle operations.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// JWT encoder.
    jwt_encoder: Arc<JwtEncoder>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Signed access token.
    pub access_token: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            jwt_encoder,
        }
    }

    /// Registers a new user.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }

        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email is already registered"));
        }

        self.validator.validate(password)?;
        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                registered_on: Utc::now().date_naive(),
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Verifies credentials and issues an access token.
    ///
    /// The error never discloses whether the email or the password was
    /// wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid credentials"));
        }

        let (access_token, expires_at) = self.jwt_encoder.issue_token(user.id)?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome {
            user,
            access_token,
            expires_at,
        })
    }

    /// Gets the current user's full profile.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
