//! # Edugate Config
//!
//! Configuration types for Edugate, loaded from environment variables.
//!
//! - [`jwt`]: Session token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address for the HTTP service
//!
//! The role→permission table is deliberately not part of this crate: it is
//! compiled into `edugate-core` and cannot be changed without a redeploy.
//!
//! # Example
//!
//! ```ignore
//! use edugate_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
