//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use fintrack_core::config::auth::AuthConfig;
use fintrack_core::error::AppError;

use super::claims::Claims;

/// Validates JWT access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks signature validity and expiration; the subject is resolved
    /// against the store by the caller.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use fintrack_core::error::ErrorKind;
    use fintrack_core::types::UserId;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_ttl_minutes: 30,
            password_min_length: 8,
        }
    }

    #[test]
    fn test_issue_then_decode() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let (token, exp) = encoder.issue_token(UserId::from_i64(9)).expect("issue");
        let claims = decoder.decode_token(&token).expect("decode");

        assert_eq!(claims.user_id(), UserId::from_i64(9));
        assert_eq!(claims.exp, exp.timestamp());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let encoder = JwtEncoder::new(&config());
        let (token, _) = encoder.issue_token(UserId::from_i64(1)).expect("issue");

        let other = AuthConfig {
            jwt_secret: "another-secret".to_string(),
            ..config()
        };
        let decoder = JwtDecoder::new(&other);
        let err = decoder.decode_token(&token).expect_err("must fail");
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_rejects_garbage_token() {
        let decoder = JwtDecoder::new(&config());
        assert!(decoder.decode_token("not.a.jwt").is_err());
    }
}
