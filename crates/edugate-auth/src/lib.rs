//! # Edugate Auth
//!
//! Session claims and JWT utilities for Edugate.
//!
//! - [`claims`]: The access-token claim set, carrying the session's role
//! - [`jwt`]: Token creation and verification
//!
//! The role is carried as an opaque string. It is only interpreted when a
//! permission check asks for it, and an unrecognized value grants nothing.
//!
//! # Example
//!
//! ```ignore
//! use edugate_auth::{create_access_token, verify_token};
//! use edugate_config::JwtConfig;
//! use edugate_core::Role;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "teacher@school.test", Role::Teacher, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role(), Some(Role::Teacher));
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
