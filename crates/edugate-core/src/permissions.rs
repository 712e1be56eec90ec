//! Permission identifiers for the Edugate dashboard.
//!
//! Each permission names one action on one resource and is written
//! `<verb>_<resource>` on the wire (`view_students`, `create_exams`,
//! `mark_attendance`). The set is fixed at compile time.
//!
//! # Example
//!
//! ```
//! use edugate_core::permissions::{AsPermission, Permission};
//!
//! assert_eq!(Permission::ViewStudents.as_str(), "view_students");
//! assert_eq!(Permission::parse("mark_attendance"), Some(Permission::MarkAttendance));
//! assert_eq!(Permission::MarkAttendance.resource(), "attendance");
//! assert_eq!("view_studnets".as_permission(), None);
//! ```

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! define_permissions {
    ($( $variant:ident => $name:literal in $resource:literal, )+) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum Permission {
            $( $variant, )+
        }

        impl Permission {
            /// Every permission, in declaration order.
            pub const ALL: &'static [Permission] = &[$( Permission::$variant, )+];

            /// Wire name used in JSON and session payloads.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Permission::$variant => $name, )+
                }
            }

            /// Resource (dashboard area) the permission acts on.
            pub const fn resource(self) -> &'static str {
                match self {
                    $( Permission::$variant => $resource, )+
                }
            }

            /// Exact, case-sensitive lookup by wire name.
            pub fn parse(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Permission::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

define_permissions! {
    ViewDashboard => "view_dashboard" in "dashboard",

    ViewStudents => "view_students" in "students",
    CreateStudents => "create_students" in "students",
    EditStudents => "edit_students" in "students",
    DeleteStudents => "delete_students" in "students",

    ViewTeachers => "view_teachers" in "teachers",
    CreateTeachers => "create_teachers" in "teachers",
    EditTeachers => "edit_teachers" in "teachers",
    DeleteTeachers => "delete_teachers" in "teachers",

    ViewAttendance => "view_attendance" in "attendance",
    MarkAttendance => "mark_attendance" in "attendance",
    EditAttendance => "edit_attendance" in "attendance",

    ViewFees => "view_fees" in "fees",
    CreateFees => "create_fees" in "fees",
    EditFees => "edit_fees" in "fees",
    DeleteFees => "delete_fees" in "fees",
    CollectFees => "collect_fees" in "fees",

    ViewExams => "view_exams" in "exams",
    CreateExams => "create_exams" in "exams",
    EditExams => "edit_exams" in "exams",
    DeleteExams => "delete_exams" in "exams",
    ViewResults => "view_results" in "exams",
    PublishResults => "publish_results" in "exams",

    ViewLibrary => "view_library" in "library",
    CreateBooks => "create_books" in "library",
    EditBooks => "edit_books" in "library",
    DeleteBooks => "delete_books" in "library",
    IssueBooks => "issue_books" in "library",
    ReturnBooks => "return_books" in "library",

    ViewHostel => "view_hostel" in "hostel",
    CreateHostel => "create_hostel" in "hostel",
    EditHostel => "edit_hostel" in "hostel",
    DeleteHostel => "delete_hostel" in "hostel",
    AssignRooms => "assign_rooms" in "hostel",

    ViewTransport => "view_transport" in "transport",
    CreateTransport => "create_transport" in "transport",
    EditTransport => "edit_transport" in "transport",
    DeleteTransport => "delete_transport" in "transport",

    ViewPayroll => "view_payroll" in "payroll",
    CreatePayroll => "create_payroll" in "payroll",
    EditPayroll => "edit_payroll" in "payroll",
    DeletePayroll => "delete_payroll" in "payroll",
    ProcessPayroll => "process_payroll" in "payroll",

    ViewBlogs => "view_blogs" in "blogs",
    CreateBlogs => "create_blogs" in "blogs",
    EditBlogs => "edit_blogs" in "blogs",
    DeleteBlogs => "delete_blogs" in "blogs",
    LikeBlogs => "like_blogs" in "blogs",
    CommentBlogs => "comment_blogs" in "blogs",

    ViewNotifications => "view_notifications" in "notifications",
    SendNotifications => "send_notifications" in "notifications",
    DeleteNotifications => "delete_notifications" in "notifications",

    ViewSchedule => "view_schedule" in "schedule",
    CreateSchedule => "create_schedule" in "schedule",
    EditSchedule => "edit_schedule" in "schedule",
    DeleteSchedule => "delete_schedule" in "schedule",

    ViewVisitors => "view_visitors" in "visitors",
    LogVisitors => "log_visitors" in "visitors",

    ViewMaintenance => "view_maintenance" in "maintenance",
    ReportMaintenance => "report_maintenance" in "maintenance",

    ManageSettings => "manage_settings" in "settings",

    ManageRoles => "manage_roles" in "roles",
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::parse(s).ok_or_else(|| anyhow!("Unknown permission: {}", s))
    }
}

/// Anything a caller may name a permission with: a typed [`Permission`] or
/// a raw string. Unknown names resolve to `None`.
pub trait AsPermission {
    fn as_permission(&self) -> Option<Permission>;
}

impl AsPermission for Permission {
    fn as_permission(&self) -> Option<Permission> {
        Some(*self)
    }
}

impl AsPermission for str {
    fn as_permission(&self) -> Option<Permission> {
        Permission::parse(self)
    }
}

impl AsPermission for String {
    fn as_permission(&self) -> Option<Permission> {
        Permission::parse(self)
    }
}

impl<T: AsPermission + ?Sized> AsPermission for &T {
    fn as_permission(&self) -> Option<Permission> {
        (**self).as_permission()
    }
}
