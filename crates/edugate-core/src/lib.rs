//! # Edugate Core
//!
//! Role-based access control and shared types for the Edugate school dashboard.
//!
//! - [`roles`]: The closed set of user roles
//! - [`permissions`]: The closed set of permission identifiers
//! - [`registry`]: The static role→permission table
//! - [`resolver`]: `has_permission` / `has_any_permission` / `has_all_permissions`
//! - [`dashboard`]: Dashboard-variant selection by role
//! - [`navigation`]: Permission-gated sidebar entries
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! Unknown roles and unknown permission names are never errors: they resolve
//! to "access denied".
//!
//! # Example
//!
//! ```
//! use edugate_core::{Permission, PermissionResolver, Role};
//!
//! let resolver = PermissionResolver::standard();
//!
//! assert!(resolver.has_permission(Role::Accountant, Permission::CollectFees));
//! assert!(!resolver.has_permission("accountant", "mark_attendance"));
//! assert!(resolver.has_all_permissions("librarian", ["issue_books", "return_books"]));
//! ```

pub mod dashboard;
pub mod errors;
pub mod navigation;
pub mod permissions;
pub mod registry;
pub mod resolver;
pub mod roles;

// Re-export commonly used types at crate root
pub use dashboard::DashboardVariant;
pub use errors::{AppError, ErrorResponse};
pub use navigation::{NAVIGATION, NavItem, visible_navigation};
pub use permissions::{AsPermission, Permission};
pub use registry::{PermissionRegistry, PermissionRegistryBuilder};
pub use resolver::{CheckMode, PermissionResolver};
pub use roles::{AsRole, Role};
