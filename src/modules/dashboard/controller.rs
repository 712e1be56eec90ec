use axum::Json;
use edugate_core::ErrorResponse;

use crate::middleware::auth::AuthUser;

use super::model::DashboardResponse;
use super::service::DashboardService;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard variant for the current session", body = DashboardResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Dashboard",
    security(("bearer_auth" = []))
)]
pub async fn get_dashboard(auth_user: AuthUser) -> Json<DashboardResponse> {
    Json(DashboardService::for_role(auth_user.raw_role()))
}
