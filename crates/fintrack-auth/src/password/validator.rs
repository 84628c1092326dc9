//! Password policy enforcement for new passwords.

use fintrack_core::config::auth::AuthConfig;
use fintrack_core::error::AppError;

/// Validates password strength against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against the configured policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min: usize) -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_ttl_minutes: 30,
            password_min_length: min,
        }
    }

    #[test]
    fn test_rejects_short_password() {
        let validator = PasswordValidator::new(&config(8));
        assert!(validator.validate("short").is_err());
        assert!(validator.validate("long enough").is_ok());
    }
}
