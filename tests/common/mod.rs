use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use edugate::router::init_router;
use edugate::state::AppState;
use edugate_auth::create_access_token;
use edugate_config::{CorsConfig, JwtConfig};
use edugate_core::{PermissionRegistry, PermissionResolver};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret-for-integration-tests";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app() -> Router {
    init_router(AppState {
        jwt_config: jwt_config(),
        cors_config: CorsConfig::from_origins("http://localhost:5173"),
        resolver: PermissionResolver::new(Arc::new(PermissionRegistry::standard())),
    })
}

/// Signs a token carrying `role` verbatim, recognized or not.
pub fn token_for(role: &str) -> String {
    create_access_token(Uuid::new_v4(), "test@example.com", role, &jwt_config()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, body)
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    send(app, request).await
}
