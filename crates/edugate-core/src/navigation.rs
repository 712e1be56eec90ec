//! Sidebar navigation gated by permissions.
//!
//! Each entry lists the permissions that unlock it; an entry is shown when the
//! session's role holds any one of them.

use serde::Serialize;

use crate::permissions::Permission;
use crate::resolver::PermissionResolver;
use crate::roles::AsRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub required: &'static [Permission],
}

pub const NAVIGATION: &[NavItem] = &[
    NavItem {
        key: "dashboard",
        label: "Dashboard",
        path: "/dashboard",
        required: &[Permission::ViewDashboard],
    },
    NavItem {
        key: "students",
        label: "Students",
        path: "/students",
        required: &[Permission::ViewStudents],
    },
    NavItem {
        key: "teachers",
        label: "Teachers",
        path: "/teachers",
        required: &[Permission::ViewTeachers],
    },
    NavItem {
        key: "attendance",
        label: "Attendance",
        path: "/attendance",
        required: &[Permission::ViewAttendance, Permission::MarkAttendance],
    },
    NavItem {
        key: "fees",
        label: "Fees",
        path: "/fees",
        required: &[Permission::ViewFees, Permission::CollectFees],
    },
    NavItem {
        key: "exams",
        label: "Exams",
        path: "/exams",
        required: &[Permission::ViewExams, Permission::ViewResults],
    },
    NavItem {
        key: "library",
        label: "Library",
        path: "/library",
        required: &[Permission::ViewLibrary],
    },
    NavItem {
        key: "hostel",
        label: "Hostel",
        path: "/hostel",
        required: &[Permission::ViewHostel],
    },
    NavItem {
        key: "transport",
        label: "Transport",
        path: "/transport",
        required: &[Permission::ViewTransport],
    },
    NavItem {
        key: "payroll",
        label: "Payroll",
        path: "/payroll",
        required: &[Permission::ViewPayroll],
    },
    NavItem {
        key: "blogs",
        label: "Blogs",
        path: "/blogs",
        required: &[Permission::ViewBlogs],
    },
    NavItem {
        key: "notifications",
        label: "Notifications",
        path: "/notifications",
        required: &[Permission::ViewNotifications, Permission::SendNotifications],
    },
    NavItem {
        key: "schedule",
        label: "Schedule",
        path: "/schedule",
        required: &[Permission::ViewSchedule],
    },
    NavItem {
        key: "visitors",
        label: "Visitors",
        path: "/visitors",
        required: &[Permission::ViewVisitors, Permission::LogVisitors],
    },
    NavItem {
        key: "maintenance",
        label: "Maintenance",
        path: "/maintenance",
        required: &[Permission::ViewMaintenance, Permission::ReportMaintenance],
    },
    NavItem {
        key: "settings",
        label: "Settings",
        path: "/settings",
        required: &[Permission::ManageSettings, Permission::ManageRoles],
    },
];

/// Navigation entries visible to `role`, in sidebar order.
pub fn visible_navigation<R: AsRole>(
    resolver: &PermissionResolver,
    role: R,
) -> Vec<&'static NavItem> {
    let role = role.as_role();
    NAVIGATION
        .iter()
        .filter(|item| resolver.has_any_permission(role, item.required))
        .collect()
}
