use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    check_permission, check_permissions, get_my_access, get_navigation, get_permissions,
    get_roles,
};

pub fn init_access_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_my_access))
        .route("/check", post(check_permissions))
        .route("/check/{permission}", get(check_permission))
        .route("/navigation", get(get_navigation))
        // Registry catalog, gated on manage_roles
        .route("/roles", get(get_roles))
        .route("/permissions", get(get_permissions))
}
