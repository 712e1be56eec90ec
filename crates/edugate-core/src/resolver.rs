//! Access-control queries over a [`PermissionRegistry`].
//!
//! The resolver answers three questions: does a role hold a permission, any
//! of several permissions, or all of them. Every query is total and pure.
//! Unknown roles and unknown permission names are denied rather than
//! reported, so a typo can only ever take access away.
//!
//! Roles may be passed typed ([`Role`]) or as raw strings from a session
//! payload (`&str`, `String`, `Option<_>`). Permissions likewise.
//!
//! # Example
//!
//! ```
//! use edugate_core::permissions::Permission;
//! use edugate_core::resolver::PermissionResolver;
//! use edugate_core::roles::Role;
//!
//! let resolver = PermissionResolver::standard();
//!
//! assert!(resolver.has_permission(Role::Teacher, Permission::MarkAttendance));
//! assert!(resolver.has_any_permission("teacher", ["delete_students", "mark_attendance"]));
//! assert!(!resolver.has_permission("guest", "view_students"));
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::permissions::{AsPermission, Permission};
use crate::registry::PermissionRegistry;
use crate::roles::AsRole;

/// How a list of permissions is combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// At least one permission must be held.
    Any,
    /// Every permission must be held.
    All,
}

impl CheckMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            CheckMode::Any => "any",
            CheckMode::All => "all",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PermissionResolver {
    registry: Arc<PermissionRegistry>,
}

impl PermissionResolver {
    pub fn new(registry: Arc<PermissionRegistry>) -> Self {
        Self { registry }
    }

    /// Resolver over [`PermissionRegistry::standard`].
    pub fn standard() -> Self {
        Self::new(Arc::new(PermissionRegistry::standard()))
    }

    pub fn registry(&self) -> &PermissionRegistry {
        &self.registry
    }

    pub fn permissions_for<R: AsRole>(&self, role: R) -> &HashSet<Permission> {
        self.registry.permissions_for(role)
    }

    /// True iff `permission` is in the role's granted set.
    pub fn has_permission<R, P>(&self, role: R, permission: P) -> bool
    where
        R: AsRole,
        P: AsPermission,
    {
        let granted = self.registry.permissions_for(role);
        permission
            .as_permission()
            .is_some_and(|permission| granted.contains(&permission))
    }

    /// True iff at least one of `permissions` is held. False for an empty list.
    pub fn has_any_permission<R, I>(&self, role: R, permissions: I) -> bool
    where
        R: AsRole,
        I: IntoIterator,
        I::Item: AsPermission,
    {
        let granted = self.registry.permissions_for(role);
        permissions.into_iter().any(|permission| {
            permission
                .as_permission()
                .is_some_and(|permission| granted.contains(&permission))
        })
    }

    /// True iff every one of `permissions` is held. True for an empty list.
    pub fn has_all_permissions<R, I>(&self, role: R, permissions: I) -> bool
    where
        R: AsRole,
        I: IntoIterator,
        I::Item: AsPermission,
    {
        let granted = self.registry.permissions_for(role);
        permissions.into_iter().all(|permission| {
            permission
                .as_permission()
                .is_some_and(|permission| granted.contains(&permission))
        })
    }

    pub fn check<R, I>(&self, role: R, mode: CheckMode, permissions: I) -> bool
    where
        R: AsRole,
        I: IntoIterator,
        I::Item: AsPermission,
    {
        match mode {
            CheckMode::Any => self.has_any_permission(role, permissions),
            CheckMode::All => self.has_all_permissions(role, permissions),
        }
    }

    /// The requested permissions the role holds, in request order. Unknown
    /// names and duplicates are dropped.
    pub fn granted<R, I>(&self, role: R, permissions: I) -> Vec<Permission>
    where
        R: AsRole,
        I: IntoIterator,
        I::Item: AsPermission,
    {
        let held = self.registry.permissions_for(role);
        let mut granted: Vec<Permission> = Vec::new();
        for permission in permissions.into_iter().filter_map(|p| p.as_permission()) {
            if held.contains(&permission) && !granted.contains(&permission) {
                granted.push(permission);
            }
        }
        granted
    }
}

impl Default for PermissionResolver {
    fn default() -> Self {
        Self::standard()
    }
}
