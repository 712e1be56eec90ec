use crate::docs::ApiDoc;
use crate::modules::access::init_access_router;
use crate::modules::dashboard::init_dashboard_router;
use crate::state::AppState;
use anyhow::anyhow;
use axum::http::{HeaderValue, Method, Uri};
use axum::routing::get;
use axum::{Json, Router, middleware};
use edugate_core::AppError;
use edugate_observability::{logging_middleware, metrics_middleware};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(anyhow!("No route for {}", uri.path()))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .nest("/access", init_access_router())
                .nest("/dashboard", init_dashboard_router()),
        )
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
