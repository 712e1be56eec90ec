//! # Edugate API
//!
//! HTTP access-control service for the Edugate school management dashboard.
//!
//! The dashboard (students, teachers, attendance, fees, exams, library,
//! hostel, transport, payroll, blogs, notifications, scheduling) hides or
//! shows every action according to the signed-in user's role. This service
//! is where those decisions are made: it holds the compiled-in
//! role→permission table and answers "may this session do X?" for the UI.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Session extractor and permission gating
//! ├── modules/
//! │   ├── access/      # Permission queries, navigation, registry catalog
//! │   └── dashboard/   # Dashboard-variant selection
//! ├── docs.rs           # OpenAPI document
//! ├── router.rs         # Main application router
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validated JSON extractor
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Decision logic over the resolver
//! - `model.rs`: Request and response DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Fail-closed
//!
//! A session whose role claim names no known role authenticates normally but
//! holds no permissions, sees no navigation, and gets the restricted
//! dashboard. Unknown permission names are denied. Neither is an error.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:5173
//! APP_HOST=0.0.0.0
//! APP_PORT=3000
//! OBSERVABILITY_ENABLED=true
//! ```

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use edugate_auth;
pub use edugate_config;
pub use edugate_core;
