use edugate_core::{Permission, PermissionResolver, Role, visible_navigation};
use tracing::instrument;

use super::model::{
    CheckPermissionsDto, CheckPermissionsResponse, MyAccessResponse, NavItemResponse,
    PermissionCategory, PermissionCheckResponse, RoleGrantsResponse,
};

pub struct AccessService;

impl AccessService {
    #[instrument(skip(resolver))]
    pub fn my_access(
        resolver: &PermissionResolver,
        raw_role: &str,
        role: Option<Role>,
    ) -> MyAccessResponse {
        let mut permissions: Vec<Permission> =
            resolver.permissions_for(role).iter().copied().collect();
        permissions.sort();

        MyAccessResponse {
            role: raw_role.to_string(),
            recognized: role.is_some(),
            permissions,
        }
    }

    /// A name that matches no permission is reported as not granted.
    #[instrument(skip(resolver))]
    pub fn check_permission(
        resolver: &PermissionResolver,
        role: Option<Role>,
        permission: &str,
    ) -> PermissionCheckResponse {
        PermissionCheckResponse {
            permission: permission.to_string(),
            granted: resolver.has_permission(role, permission),
        }
    }

    #[instrument(skip(resolver, dto), fields(mode = dto.mode.as_str(), count = dto.permissions.len()))]
    pub fn check_permissions(
        resolver: &PermissionResolver,
        role: Option<Role>,
        dto: &CheckPermissionsDto,
    ) -> CheckPermissionsResponse {
        CheckPermissionsResponse {
            mode: dto.mode,
            granted: resolver.check(role, dto.mode, &dto.permissions),
            granted_permissions: resolver.granted(role, &dto.permissions),
        }
    }

    #[instrument(skip(resolver))]
    pub fn navigation(resolver: &PermissionResolver, role: Option<Role>) -> Vec<NavItemResponse> {
        visible_navigation(resolver, role)
            .into_iter()
            .map(NavItemResponse::from)
            .collect()
    }

    #[instrument(skip(resolver))]
    pub fn roles(resolver: &PermissionResolver) -> Vec<RoleGrantsResponse> {
        resolver
            .registry()
            .roles()
            .map(|(role, granted)| {
                let mut permissions: Vec<Permission> = granted.iter().copied().collect();
                permissions.sort();
                RoleGrantsResponse {
                    role,
                    label: role.label().to_string(),
                    permissions,
                }
            })
            .collect()
    }

    /// Every known permission grouped by resource, in declaration order.
    pub fn permissions() -> Vec<PermissionCategory> {
        let mut categories: Vec<PermissionCategory> = Vec::new();
        for permission in Permission::ALL {
            match categories
                .iter_mut()
                .find(|category| category.resource == permission.resource())
            {
                Some(category) => category.permissions.push(*permission),
                None => categories.push(PermissionCategory {
                    resource: permission.resource().to_string(),
                    permissions: vec![*permission],
                }),
            }
        }
        categories
    }
}
