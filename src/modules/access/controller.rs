use axum::{
    Json,
    extract::{Path, State},
};
use edugate_core::{AppError, ErrorResponse};

use crate::middleware::auth::AuthUser;
use crate::middleware::permission::RequireManageRoles;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    CheckPermissionsDto, CheckPermissionsResponse, MyAccessResponse, NavItemResponse,
    PermissionCategory, PermissionCheckResponse, RoleGrantsResponse,
};
use super::service::AccessService;

#[utoipa::path(
    get,
    path = "/api/access/me",
    responses(
        (status = 200, description = "Role and permissions of the current session", body = MyAccessResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn get_my_access(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Json<MyAccessResponse> {
    Json(AccessService::my_access(
        &state.resolver,
        auth_user.raw_role(),
        auth_user.role(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/access/check/{permission}",
    params(
        ("permission" = String, Path, description = "Permission name, e.g. mark_attendance")
    ),
    responses(
        (status = 200, description = "Whether the session holds the permission", body = PermissionCheckResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn check_permission(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(permission): Path<String>,
) -> Json<PermissionCheckResponse> {
    Json(AccessService::check_permission(
        &state.resolver,
        auth_user.role(),
        &permission,
    ))
}

#[utoipa::path(
    post,
    path = "/api/access/check",
    request_body = CheckPermissionsDto,
    responses(
        (status = 200, description = "Combined result of the requested permissions", body = CheckPermissionsResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Too many permissions requested", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn check_permissions(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CheckPermissionsDto>,
) -> Json<CheckPermissionsResponse> {
    Json(AccessService::check_permissions(
        &state.resolver,
        auth_user.role(),
        &dto,
    ))
}

#[utoipa::path(
    get,
    path = "/api/access/navigation",
    responses(
        (status = 200, description = "Navigation items visible to the session", body = Vec<NavItemResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn get_navigation(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Json<Vec<NavItemResponse>> {
    Json(AccessService::navigation(&state.resolver, auth_user.role()))
}

#[utoipa::path(
    get,
    path = "/api/access/roles",
    responses(
        (status = 200, description = "Every role with its granted permissions", body = Vec<RoleGrantsResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn get_roles(
    State(state): State<AppState>,
    RequireManageRoles(_auth_user): RequireManageRoles,
) -> Result<Json<Vec<RoleGrantsResponse>>, AppError> {
    Ok(Json(AccessService::roles(&state.resolver)))
}

#[utoipa::path(
    get,
    path = "/api/access/permissions",
    responses(
        (status = 200, description = "Every permission grouped by resource", body = Vec<PermissionCategory>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden", body = ErrorResponse)
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
pub async fn get_permissions(
    RequireManageRoles(_auth_user): RequireManageRoles,
) -> Result<Json<Vec<PermissionCategory>>, AppError> {
    Ok(Json(AccessService::permissions()))
}
