use edugate_core::{CheckMode, DashboardVariant, ErrorResponse, Permission, Role};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::access::model::{
    CheckPermissionsDto, CheckPermissionsResponse, MyAccessResponse, NavItemResponse,
    PermissionCategory, PermissionCheckResponse, RoleGrantsResponse,
};
use crate::modules::dashboard::model::DashboardResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::access::controller::get_my_access,
        crate::modules::access::controller::check_permission,
        crate::modules::access::controller::check_permissions,
        crate::modules::access::controller::get_navigation,
        crate::modules::access::controller::get_roles,
        crate::modules::access::controller::get_permissions,
        crate::modules::dashboard::controller::get_dashboard,
    ),
    components(
        schemas(
            Role,
            Permission,
            CheckMode,
            DashboardVariant,
            ErrorResponse,
            MyAccessResponse,
            PermissionCheckResponse,
            CheckPermissionsDto,
            CheckPermissionsResponse,
            NavItemResponse,
            RoleGrantsResponse,
            PermissionCategory,
            DashboardResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Access", description = "Permission queries for the current session and the role registry"),
        (name = "Dashboard", description = "Dashboard selection by role")
    ),
    info(
        title = "Edugate API",
        version = "0.1.0",
        description = "Role-based access control for the Edugate school management dashboard.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
