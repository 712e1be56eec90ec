//! Request extractors for authentication and permission gating.
//!
//! - [`auth`]: `AuthUser`, the bearer-token session extractor
//! - [`permission`]: `check_*` helpers and `require_permission!` extractors
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` verifies the JWT and exposes the claims
//! 3. Permission extractors or `check_*` helpers ask the resolver whether
//!    the session's role holds what the handler needs
//! 4. Handler executes if all checks pass, otherwise the client gets `403`
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use crate::middleware::permission::{RequireManageRoles, check_any_permission};
//!
//! async fn list_roles(RequireManageRoles(auth_user): RequireManageRoles) -> impl IntoResponse {
//!     // Only executes if the role holds "manage_roles"
//! }
//!
//! async fn fee_summary(
//!     State(state): State<AppState>,
//!     auth_user: AuthUser,
//! ) -> Result<impl IntoResponse, AppError> {
//!     check_any_permission(&state.resolver, &auth_user, &[Permission::ViewFees, Permission::CollectFees])?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod permission;
