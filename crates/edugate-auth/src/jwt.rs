//! JWT (JSON Web Token) utilities for session tokens.
//!
//! Access tokens carry the user ID, email, and role name. The role is
//! written verbatim, so tokens minted for roles this build does not know
//! still verify; they simply resolve to no permissions.

use std::fmt::Display;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use edugate_config::JwtConfig;
use edugate_core::AppError;

use crate::claims::Claims;

/// Creates an access token for a session.
///
/// # Arguments
///
/// * `user_id` - The user's UUID
/// * `email` - The user's email address
/// * `role` - The session role, typed or raw
/// * `jwt_config` - Secret and expiry settings
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token<R: Display>(
    user_id: Uuid,
    email: &str,
    role: R,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.access_token_expiry).max(0) as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        exp,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or the token is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}

#[cfg(test)]
mod tests {
    use edugate_core::Role;

    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_create_access_token_success() {
        let config = get_test_jwt_config();
        let token =
            create_access_token(Uuid::new_v4(), "test@example.com", Role::Teacher, &config)
                .unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token_success() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let token =
            create_access_token(user_id, "test@example.com", Role::Accountant, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.role, "accountant");
        assert_eq!(claims.role(), Some(Role::Accountant));
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_unknown_role_is_kept_verbatim() {
        let config = get_test_jwt_config();
        let token = create_access_token(Uuid::new_v4(), "x@example.com", "guest", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.role, "guest");
        assert_eq!(claims.role(), None);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let err = verify_token("invalid-token", &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token =
            create_access_token(Uuid::new_v4(), "test@example.com", Role::Student, &config)
                .unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_verify_token_expired() {
        let config = JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: -7200,
        };
        let token =
            create_access_token(Uuid::new_v4(), "old@example.com", Role::Teacher, &config)
                .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }
}
