//! User roles known to the school dashboard.
//!
//! Roles travel as plain strings in session payloads (`"teacher"`,
//! `"super_admin"`, ...). Inside the application they are a closed enum so
//! typos in code are compile errors. Strings coming from outside are parsed
//! with [`Role::parse`], which never fails loudly: anything unrecognized is
//! `None` and is treated as a role with no permissions.
//!
//! # Example
//!
//! ```
//! use edugate_core::roles::{AsRole, Role};
//!
//! assert_eq!(Role::parse("teacher"), Some(Role::Teacher));
//! assert_eq!(Role::parse("Teacher"), None);
//! assert_eq!("guest".as_role(), None);
//! assert_eq!(Some("principal").as_role(), Some(Role::Principal));
//! ```

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Principal,
    Teacher,
    Student,
    Parent,
    Accountant,
    Librarian,
    Guard,
    Cleaner,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: &'static [Role] = &[
        Role::SuperAdmin,
        Role::Admin,
        Role::Principal,
        Role::Teacher,
        Role::Student,
        Role::Parent,
        Role::Accountant,
        Role::Librarian,
        Role::Guard,
        Role::Cleaner,
    ];

    /// Wire name used in session payloads and JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Principal => "principal",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
            Role::Accountant => "accountant",
            Role::Librarian => "librarian",
            Role::Guard => "guard",
            Role::Cleaner => "cleaner",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Administrator",
            Role::Principal => "Principal",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Accountant => "Accountant",
            Role::Librarian => "Librarian",
            Role::Guard => "Security Guard",
            Role::Cleaner => "Cleaner",
        }
    }

    /// Exact, case-sensitive lookup by wire name.
    pub fn parse(name: &str) -> Option<Self> {
        Role::ALL.iter().copied().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| anyhow!("Unknown role: {}", s))
    }
}

/// Anything a caller may hold a role as: a typed [`Role`], a raw string from
/// a session payload, or an optional value of either.
///
/// Returns `None` for unknown or missing roles.
pub trait AsRole {
    fn as_role(&self) -> Option<Role>;
}

impl AsRole for Role {
    fn as_role(&self) -> Option<Role> {
        Some(*self)
    }
}

impl AsRole for str {
    fn as_role(&self) -> Option<Role> {
        Role::parse(self)
    }
}

impl AsRole for String {
    fn as_role(&self) -> Option<Role> {
        Role::parse(self)
    }
}

impl<T: AsRole + ?Sized> AsRole for &T {
    fn as_role(&self) -> Option<Role> {
        (**self).as_role()
    }
}

impl<T: AsRole> AsRole for Option<T> {
    fn as_role(&self) -> Option<Role> {
        self.as_ref().and_then(|role| role.as_role())
    }
}
