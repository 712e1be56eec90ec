//! Role→permission registry.
//!
//! The registry is the single, static source of truth for which role holds
//! which permission. It is assembled once through [`PermissionRegistryBuilder`]
//! and is read-only afterwards: there is no API that adds or removes a grant
//! from a built registry. Applications build it at startup and share it behind
//! an `Arc`.
//!
//! # Example
//!
//! ```
//! use edugate_core::permissions::Permission;
//! use edugate_core::registry::PermissionRegistry;
//! use edugate_core::roles::Role;
//!
//! let registry = PermissionRegistry::builder()
//!     .grant(Role::Teacher, [Permission::ViewStudents, Permission::MarkAttendance])
//!     .build();
//!
//! assert!(registry.permissions_for(Role::Teacher).contains(&Permission::MarkAttendance));
//! assert!(registry.permissions_for("guest").is_empty());
//! ```

use std::collections::{HashMap, HashSet};

use crate::permissions::Permission;
use crate::roles::{AsRole, Role};

#[derive(Debug, Clone)]
pub struct PermissionRegistry {
    grants: HashMap<Role, HashSet<Permission>>,
    empty: HashSet<Permission>,
}

impl PermissionRegistry {
    pub fn builder() -> PermissionRegistryBuilder {
        PermissionRegistryBuilder::default()
    }

    /// The compiled-in school permission table.
    pub fn standard() -> Self {
        Self::builder()
            .grant_all(Role::SuperAdmin)
            .grant(
                Role::Admin,
                Permission::ALL
                    .iter()
                    .copied()
                    .filter(|p| *p != Permission::ManageRoles),
            )
            .grant(Role::Principal, PRINCIPAL.iter().copied())
            .grant(Role::Teacher, TEACHER.iter().copied())
            .grant(Role::Student, STUDENT.iter().copied())
            .grant(Role::Parent, PARENT.iter().copied())
            .grant(Role::Accountant, ACCOUNTANT.iter().copied())
            .grant(Role::Librarian, LIBRARIAN.iter().copied())
            .grant(Role::Guard, GUARD.iter().copied())
            .grant(Role::Cleaner, CLEANER.iter().copied())
            .build()
    }

    /// Permissions held by `role`. Unknown or missing roles hold nothing.
    pub fn permissions_for<R: AsRole>(&self, role: R) -> &HashSet<Permission> {
        role.as_role()
            .and_then(|role| self.grants.get(&role))
            .unwrap_or(&self.empty)
    }

    /// Every role with its grants, in [`Role::ALL`] order.
    pub fn roles(&self) -> impl Iterator<Item = (Role, &HashSet<Permission>)> + '_ {
        Role::ALL
            .iter()
            .map(move |role| (*role, self.permissions_for(*role)))
    }
}

impl Default for PermissionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Accumulates grants before a [`PermissionRegistry`] is frozen.
#[derive(Debug, Default)]
pub struct PermissionRegistryBuilder {
    grants: HashMap<Role, HashSet<Permission>>,
}

impl PermissionRegistryBuilder {
    /// Adds `permissions` to `role`. Repeated grants accumulate.
    pub fn grant<I>(mut self, role: Role, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        self.grants.entry(role).or_default().extend(permissions);
        self
    }

    pub fn grant_all(self, role: Role) -> Self {
        self.grant(role, Permission::ALL.iter().copied())
    }

    /// Freezes the table. Every role gets an entry, empty if never granted.
    pub fn build(mut self) -> PermissionRegistry {
        for role in Role::ALL {
            self.grants.entry(*role).or_default();
        }

        PermissionRegistry {
            grants: self.grants,
            empty: HashSet::new(),
        }
    }
}

const PRINCIPAL: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewStudents,
    Permission::CreateStudents,
    Permission::EditStudents,
    Permission::ViewTeachers,
    Permission::CreateTeachers,
    Permission::EditTeachers,
    Permission::ViewAttendance,
    Permission::MarkAttendance,
    Permission::EditAttendance,
    Permission::ViewFees,
    Permission::ViewExams,
    Permission::CreateExams,
    Permission::EditExams,
    Permission::ViewResults,
    Permission::PublishResults,
    Permission::ViewLibrary,
    Permission::ViewHostel,
    Permission::ViewTransport,
    Permission::ViewPayroll,
    Permission::ViewBlogs,
    Permission::CreateBlogs,
    Permission::EditBlogs,
    Permission::DeleteBlogs,
    Permission::LikeBlogs,
    Permission::CommentBlogs,
    Permission::ViewNotifications,
    Permission::SendNotifications,
    Permission::ViewSchedule,
    Permission::CreateSchedule,
    Permission::EditSchedule,
    Permission::DeleteSchedule,
    Permission::ViewVisitors,
    Permission::ViewMaintenance,
];

const TEACHER: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewStudents,
    Permission::ViewTeachers,
    Permission::ViewAttendance,
    Permission::MarkAttendance,
    Permission::ViewExams,
    Permission::CreateExams,
    Permission::EditExams,
    Permission::ViewResults,
    Permission::ViewLibrary,
    Permission::ViewBlogs,
    Permission::CreateBlogs,
    Permission::LikeBlogs,
    Permission::CommentBlogs,
    Permission::ViewNotifications,
    Permission::ViewSchedule,
];

const STUDENT: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewAttendance,
    Permission::ViewFees,
    Permission::ViewExams,
    Permission::ViewResults,
    Permission::ViewLibrary,
    Permission::ViewHostel,
    Permission::ViewTransport,
    Permission::ViewBlogs,
    Permission::LikeBlogs,
    Permission::CommentBlogs,
    Permission::ViewNotifications,
    Permission::ViewSchedule,
];

const PARENT: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewAttendance,
    Permission::ViewFees,
    Permission::ViewResults,
    Permission::ViewTransport,
    Permission::ViewBlogs,
    Permission::ViewNotifications,
    Permission::ViewSchedule,
];

const ACCOUNTANT: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewStudents,
    Permission::ViewTeachers,
    Permission::ViewFees,
    Permission::CreateFees,
    Permission::EditFees,
    Permission::DeleteFees,
    Permission::CollectFees,
    Permission::ViewPayroll,
    Permission::CreatePayroll,
    Permission::EditPayroll,
    Permission::DeletePayroll,
    Permission::ProcessPayroll,
    Permission::ViewBlogs,
    Permission::ViewNotifications,
];

const LIBRARIAN: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewStudents,
    Permission::ViewLibrary,
    Permission::CreateBooks,
    Permission::EditBooks,
    Permission::DeleteBooks,
    Permission::IssueBooks,
    Permission::ReturnBooks,
    Permission::ViewBlogs,
    Permission::ViewNotifications,
];

const GUARD: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewStudents,
    Permission::ViewVisitors,
    Permission::LogVisitors,
    Permission::ViewTransport,
    Permission::ViewNotifications,
];

const CLEANER: &[Permission] = &[
    Permission::ViewDashboard,
    Permission::ViewMaintenance,
    Permission::ReportMaintenance,
    Permission::ViewNotifications,
    Permission::ViewSchedule,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_an_entry() {
        let registry = PermissionRegistry::builder().build();
        assert_eq!(registry.grants.len(), Role::ALL.len());
        for role in Role::ALL {
            assert!(registry.permissions_for(*role).is_empty());
        }
    }

    #[test]
    fn test_super_admin_holds_everything() {
        let registry = PermissionRegistry::standard();
        let granted = registry.permissions_for(Role::SuperAdmin);
        assert_eq!(granted.len(), Permission::ALL.len());
    }

    #[test]
    fn test_only_super_admin_manages_roles() {
        let registry = PermissionRegistry::standard();
        for (role, granted) in registry.roles() {
            assert_eq!(
                granted.contains(&Permission::ManageRoles),
                role == Role::SuperAdmin,
                "unexpected manage_roles grant for {}",
                role
            );
        }
    }

    #[test]
    fn test_every_standard_role_can_open_the_dashboard() {
        let registry = PermissionRegistry::standard();
        for (role, granted) in registry.roles() {
            assert!(
                granted.contains(&Permission::ViewDashboard),
                "{} cannot view the dashboard",
                role
            );
            assert!(granted.contains(&Permission::ViewNotifications));
        }
    }

    #[test]
    fn test_standard_teacher_grants() {
        let registry = PermissionRegistry::standard();
        let teacher = registry.permissions_for(Role::Teacher);
        assert!(teacher.contains(&Permission::ViewStudents));
        assert!(teacher.contains(&Permission::MarkAttendance));
        assert!(!teacher.contains(&Permission::DeleteStudents));
        assert!(!teacher.contains(&Permission::ViewPayroll));
    }

    #[test]
    fn test_unknown_roles_hold_nothing() {
        let registry = PermissionRegistry::standard();
        assert!(registry.permissions_for("guest").is_empty());
        assert!(registry.permissions_for("").is_empty());
        assert!(registry.permissions_for(None::<&str>).is_empty());
        assert!(registry.permissions_for(None::<Role>).is_empty());
    }

    #[test]
    fn test_string_and_typed_lookups_agree() {
        let registry = PermissionRegistry::standard();
        for role in Role::ALL {
            assert_eq!(
                registry.permissions_for(*role),
                registry.permissions_for(role.as_str())
            );
        }
    }

    #[test]
    fn test_builder_accumulates_and_deduplicates() {
        let registry = PermissionRegistry::builder()
            .grant(Role::Guard, [Permission::ViewVisitors])
            .grant(
                Role::Guard,
                [Permission::ViewVisitors, Permission::LogVisitors],
            )
            .build();

        let guard = registry.permissions_for(Role::Guard);
        assert_eq!(guard.len(), 2);
        assert!(guard.contains(&Permission::LogVisitors));
    }

    #[test]
    fn test_roles_iterates_in_declaration_order() {
        let registry = PermissionRegistry::standard();
        let order: Vec<Role> = registry.roles().map(|(role, _)| role).collect();
        assert_eq!(order, Role::ALL);
    }
}
