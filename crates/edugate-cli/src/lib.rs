//! # Edugate CLI
//!
//! Command-line inspection of the compiled-in permission registry.
//!
//! This library crate provides the report formatting used by the CLI binary.
//! Roles and permissions are accepted as free strings so an operator can see
//! exactly what an arbitrary session role would be allowed to do.
//!
//! ## Usage
//!
//! ```
//! use edugate_cli::report;
//! use edugate_core::PermissionResolver;
//!
//! let resolver = PermissionResolver::standard();
//! let lines = report::permissions(&resolver, "cleaner");
//! assert!(lines.iter().any(|line| line.contains("report_maintenance")));
//! ```

pub mod report;
