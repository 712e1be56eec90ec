use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use edugate_auth::{Claims, verify_token};
use edugate_core::{AppError, Role};

use crate::state::AppState;

/// Extractor that validates the bearer JWT and provides the session's claims.
///
/// The role claim is kept as the raw string the token carried. A role that
/// names nothing in [`Role`] still authenticates; it simply holds no
/// permissions.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The session's role, or `None` if the claim names no known role.
    pub fn role(&self) -> Option<Role> {
        self.0.role()
    }

    /// The role claim exactly as it appeared in the token.
    pub fn raw_role(&self) -> &str {
        &self.0.role
    }

    pub fn is_role_recognized(&self) -> bool {
        self.role().is_some()
    }

}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        AppError::unauthorized("Missing authorization header".to_string())
                    } else {
                        AppError::unauthorized("Invalid authorization header format".to_string())
                    }
                })?;

        let claims = verify_token(bearer.token(), &state.jwt_config)?;

        let auth_user = AuthUser(claims);
        if !auth_user.is_role_recognized() {
            tracing::warn!(
                user_id = %auth_user.0.sub,
                role = %auth_user.raw_role(),
                "Token carries an unrecognized role, no permissions granted"
            );
        }

        Ok(auth_user)
    }
}
