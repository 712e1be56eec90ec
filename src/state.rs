use std::sync::Arc;

use edugate_config::{CorsConfig, JwtConfig};
use edugate_core::{PermissionRegistry, PermissionResolver};

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub resolver: PermissionResolver,
}

/// Builds the state once at startup. The permission registry is frozen here
/// and shared read-only by every request.
pub fn init_app_state() -> AppState {
    let registry = Arc::new(PermissionRegistry::standard());
    tracing::info!(
        roles = registry.roles().count(),
        "Permission registry loaded"
    );

    AppState {
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        resolver: PermissionResolver::new(registry),
    }
}
