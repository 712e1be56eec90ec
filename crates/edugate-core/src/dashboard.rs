//! Selection of the top-level dashboard view for a session.
//!
//! The variant is chosen from the role alone; it does not consult the
//! permission registry. A missing or unrecognized role gets the
//! [`DashboardVariant::Restricted`] view.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::roles::{AsRole, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    Admin,
    Principal,
    Teacher,
    Student,
    Parent,
    Accountant,
    Librarian,
    SupportStaff,
    Restricted,
}

impl DashboardVariant {
    pub fn for_role<R: AsRole>(role: R) -> Self {
        match role.as_role() {
            Some(Role::SuperAdmin) | Some(Role::Admin) => DashboardVariant::Admin,
            Some(Role::Principal) => DashboardVariant::Principal,
            Some(Role::Teacher) => DashboardVariant::Teacher,
            Some(Role::Student) => DashboardVariant::Student,
            Some(Role::Parent) => DashboardVariant::Parent,
            Some(Role::Accountant) => DashboardVariant::Accountant,
            Some(Role::Librarian) => DashboardVariant::Librarian,
            Some(Role::Guard) | Some(Role::Cleaner) => DashboardVariant::SupportStaff,
            None => DashboardVariant::Restricted,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DashboardVariant::Admin => "admin",
            DashboardVariant::Principal => "principal",
            DashboardVariant::Teacher => "teacher",
            DashboardVariant::Student => "student",
            DashboardVariant::Parent => "parent",
            DashboardVariant::Accountant => "accountant",
            DashboardVariant::Librarian => "librarian",
            DashboardVariant::SupportStaff => "support_staff",
            DashboardVariant::Restricted => "restricted",
        }
    }

    /// Heading shown above the dashboard.
    pub const fn title(self) -> &'static str {
        match self {
            DashboardVariant::Admin => "Administration Dashboard",
            DashboardVariant::Principal => "Principal Dashboard",
            DashboardVariant::Teacher => "Teacher Dashboard",
            DashboardVariant::Student => "Student Dashboard",
            DashboardVariant::Parent => "Parent Dashboard",
            DashboardVariant::Accountant => "Finance Dashboard",
            DashboardVariant::Librarian => "Library Dashboard",
            DashboardVariant::SupportStaff => "Staff Dashboard",
            DashboardVariant::Restricted => "Access Restricted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_roles_share_admin_view() {
        assert_eq!(
            DashboardVariant::for_role(Role::SuperAdmin),
            DashboardVariant::Admin
        );
        assert_eq!(DashboardVariant::for_role("admin"), DashboardVariant::Admin);
    }

    #[test]
    fn test_support_staff() {
        assert_eq!(
            DashboardVariant::for_role("guard"),
            DashboardVariant::SupportStaff
        );
        assert_eq!(
            DashboardVariant::for_role(Role::Cleaner),
            DashboardVariant::SupportStaff
        );
    }

    #[test]
    fn test_unknown_role_is_restricted() {
        assert_eq!(
            DashboardVariant::for_role("guest"),
            DashboardVariant::Restricted
        );
        assert_eq!(DashboardVariant::for_role(""), DashboardVariant::Restricted);
        assert_eq!(
            DashboardVariant::for_role(None::<&str>),
            DashboardVariant::Restricted
        );
    }

    #[test]
    fn test_every_role_has_a_non_restricted_view() {
        for role in Role::ALL {
            assert_ne!(
                DashboardVariant::for_role(*role),
                DashboardVariant::Restricted
            );
        }
    }

    #[test]
    fn test_serialized_name_matches_as_str() {
        let json = serde_json::to_string(&DashboardVariant::SupportStaff).unwrap();
        assert_eq!(json, "\"support_staff\"");
        assert_eq!(DashboardVariant::SupportStaff.as_str(), "support_staff");
    }
}
