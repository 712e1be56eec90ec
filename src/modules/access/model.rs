use edugate_core::{CheckMode, NavItem, Permission, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MyAccessResponse {
    /// Role claim as carried by the session token.
    pub role: String,
    /// Whether `role` names a known role. Unrecognized roles hold nothing.
    pub recognized: bool,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PermissionCheckResponse {
    pub permission: String,
    pub granted: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckPermissionsDto {
    pub mode: CheckMode,
    #[validate(length(max = 100, message = "At most 100 permissions can be checked at once"))]
    pub permissions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckPermissionsResponse {
    pub mode: CheckMode,
    pub granted: bool,
    /// Requested permissions the role holds, in request order.
    pub granted_permissions: Vec<Permission>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavItemResponse {
    pub key: String,
    pub label: String,
    pub path: String,
    /// Holding any one of these makes the item visible.
    pub required: Vec<Permission>,
}

impl From<&NavItem> for NavItemResponse {
    fn from(item: &NavItem) -> Self {
        Self {
            key: item.key.to_string(),
            label: item.label.to_string(),
            path: item.path.to_string(),
            required: item.required.to_vec(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleGrantsResponse {
    pub role: Role,
    pub label: String,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PermissionCategory {
    pub resource: String,
    pub permissions: Vec<Permission>,
}
