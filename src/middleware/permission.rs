//! Permission gating for handlers.
//!
//! All helpers ask the [`PermissionResolver`] about the session's role and
//! turn a denial into `403 Forbidden`. Every decision is recorded in the
//! `access_decisions_total` counter.

use edugate_core::{AppError, Permission, PermissionResolver};
use edugate_observability::track_access_decision;

use crate::middleware::auth::AuthUser;

fn join(permissions: &[Permission]) -> String {
    permissions
        .iter()
        .map(|permission| permission.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn check_permission(
    resolver: &PermissionResolver,
    auth_user: &AuthUser,
    permission: Permission,
) -> Result<(), AppError> {
    let granted = resolver.has_permission(auth_user.role(), permission);
    track_access_decision("single", granted);

    if !granted {
        tracing::debug!(role = %auth_user.raw_role(), %permission, "Permission denied");
        return Err(AppError::forbidden(format!(
            "Access denied. Missing required permission: {}",
            permission
        )));
    }
    Ok(())
}

/// Passes if the role holds at least one of `permissions`. An empty list
/// always denies.
pub fn check_any_permission(
    resolver: &PermissionResolver,
    auth_user: &AuthUser,
    permissions: &[Permission],
) -> Result<(), AppError> {
    let granted = resolver.has_any_permission(auth_user.role(), permissions);
    track_access_decision("any", granted);

    if !granted {
        tracing::debug!(role = %auth_user.raw_role(), "No permission from set held");
        return Err(AppError::forbidden(format!(
            "Access denied. Requires one of: {}",
            join(permissions)
        )));
    }
    Ok(())
}

/// Passes if the role holds every one of `permissions`. An empty list always
/// passes. The error names only the permissions that are missing.
pub fn check_all_permissions(
    resolver: &PermissionResolver,
    auth_user: &AuthUser,
    permissions: &[Permission],
) -> Result<(), AppError> {
    let role = auth_user.role();
    let granted = resolver.has_all_permissions(role, permissions);
    track_access_decision("all", granted);

    if !granted {
        let missing: Vec<Permission> = permissions
            .iter()
            .copied()
            .filter(|permission| !resolver.has_permission(role, *permission))
            .collect();
        tracing::debug!(role = %auth_user.raw_role(), missing = %join(&missing), "Permissions missing");
        return Err(AppError::forbidden(format!(
            "Access denied. Missing required permissions: {}",
            join(&missing)
        )));
    }
    Ok(())
}

/// Defines an extractor that authenticates the request and then requires a
/// single permission.
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = $crate::edugate_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;

                $crate::middleware::permission::check_permission(
                    &state.resolver,
                    &auth_user,
                    $permission,
                )?;

                Ok($name(auth_user))
            }
        }
    };
}

require_permission!(RequireManageRoles, Permission::ManageRoles);
