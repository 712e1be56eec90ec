mod common;

use axum::http::StatusCode;
use common::{get, post_json, setup_test_app, token_for};
use serde_json::json;

#[tokio::test]
async fn test_requests_without_token_are_unauthorized() {
    let app = setup_test_app();
    let (status, body) = get(app, "/api/access/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing authorization header");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = setup_test_app();
    let (status, body) = get(app, "/api/access/me", Some("not.a.jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let other = edugate_config::JwtConfig {
        secret: "another-secret".to_string(),
        access_token_expiry: 3600,
    };
    let token =
        edugate_auth::create_access_token(uuid::Uuid::new_v4(), "a@b.com", "teacher", &other)
            .unwrap();

    let (status, _) = get(setup_test_app(), "/api/access/me", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_for_teacher() {
    let token = token_for("teacher");
    let (status, body) = get(setup_test_app(), "/api/access/me", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "teacher");
    assert_eq!(body["recognized"], true);

    let permissions = body["permissions"].as_array().unwrap();
    assert!(permissions.contains(&json!("mark_attendance")));
    assert!(!permissions.contains(&json!("delete_students")));
}

#[tokio::test]
async fn test_me_for_unknown_role_has_no_permissions() {
    let token = token_for("Teacher");
    let (status, body) = get(setup_test_app(), "/api/access/me", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "Teacher");
    assert_eq!(body["recognized"], false);
    assert_eq!(body["permissions"], json!([]));
}

#[tokio::test]
async fn test_single_check() {
    let token = token_for("teacher");

    let (status, body) = get(
        setup_test_app(),
        "/api/access/check/mark_attendance",
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["permission"], "mark_attendance");
    assert_eq!(body["granted"], true);

    let (_, body) = get(
        setup_test_app(),
        "/api/access/check/delete_students",
        Some(&token),
    )
    .await;
    assert_eq!(body["granted"], false);
}

#[tokio::test]
async fn test_single_check_unknown_permission_is_denied_not_rejected() {
    let token = token_for("super_admin");
    let (status, body) = get(
        setup_test_app(),
        "/api/access/check/launch_rockets",
        Some(&token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["granted"], false);
}

#[tokio::test]
async fn test_bulk_check_any() {
    let token = token_for("teacher");
    let (status, body) = post_json(
        setup_test_app(),
        "/api/access/check",
        &token,
        json!({ "mode": "any", "permissions": ["delete_students", "mark_attendance"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "any");
    assert_eq!(body["granted"], true);
    assert_eq!(body["granted_permissions"], json!(["mark_attendance"]));
}

#[tokio::test]
async fn test_bulk_check_all() {
    let token = token_for("teacher");
    let (_, body) = post_json(
        setup_test_app(),
        "/api/access/check",
        &token,
        json!({ "mode": "all", "permissions": ["view_students", "mark_attendance"] }),
    )
    .await;
    assert_eq!(body["granted"], true);

    let (_, body) = post_json(
        setup_test_app(),
        "/api/access/check",
        &token,
        json!({ "mode": "all", "permissions": ["view_students", "delete_students"] }),
    )
    .await;
    assert_eq!(body["granted"], false);
    assert_eq!(body["granted_permissions"], json!(["view_students"]));
}

#[tokio::test]
async fn test_bulk_check_empty_list_is_vacuous() {
    let token = token_for("guest");

    let (status, body) = post_json(
        setup_test_app(),
        "/api/access/check",
        &token,
        json!({ "mode": "any", "permissions": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["granted"], false);

    let (_, body) = post_json(
        setup_test_app(),
        "/api/access/check",
        &token,
        json!({ "mode": "all", "permissions": [] }),
    )
    .await;
    assert_eq!(body["granted"], true);
}

#[tokio::test]
async fn test_bulk_check_rejects_bad_mode() {
    let token = token_for("teacher");
    let (status, _) = post_json(
        setup_test_app(),
        "/api/access/check",
        &token,
        json!({ "mode": "some", "permissions": ["view_students"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_check_requires_permissions_field() {
    let token = token_for("teacher");
    let (status, body) = post_json(
        setup_test_app(),
        "/api/access/check",
        &token,
        json!({ "mode": "any" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "permissions is required");
}

#[tokio::test]
async fn test_bulk_check_limits_list_length() {
    let token = token_for("teacher");
    let permissions: Vec<String> = (0..101).map(|i| format!("permission_{}", i)).collect();
    let (status, body) = post_json(
        setup_test_app(),
        "/api/access/check",
        &token,
        json!({ "mode": "any", "permissions": permissions }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "At most 100 permissions can be checked at once");
}

#[tokio::test]
async fn test_navigation_for_cleaner() {
    let token = token_for("cleaner");
    let (status, body) = get(setup_test_app(), "/api/access/navigation", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["dashboard", "notifications", "schedule", "maintenance"]);
}

#[tokio::test]
async fn test_navigation_for_unknown_role_is_empty() {
    let token = token_for("visitor");
    let (status, body) = get(setup_test_app(), "/api/access/navigation", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_role_catalog_requires_manage_roles() {
    let token = token_for("admin");
    let (status, body) = get(setup_test_app(), "/api/access/roles", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Access denied. Missing required permission: manage_roles"
    );

    let token = token_for("unknown");
    let (status, _) = get(setup_test_app(), "/api/access/permissions", Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_role_catalog_for_super_admin() {
    let token = token_for("super_admin");
    let (status, body) = get(setup_test_app(), "/api/access/roles", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let roles = body.as_array().unwrap();
    assert_eq!(roles.len(), 10);
    assert_eq!(roles[0]["role"], "super_admin");
    assert_eq!(roles[0]["label"], "Super Admin");

    let cleaner = roles.iter().find(|r| r["role"] == "cleaner").unwrap();
    assert_eq!(cleaner["permissions"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_permission_catalog_for_super_admin() {
    let token = token_for("super_admin");
    let (status, body) = get(setup_test_app(), "/api/access/permissions", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    let library = body
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["resource"] == "library")
        .unwrap();
    assert!(
        library["permissions"]
            .as_array()
            .unwrap()
            .contains(&json!("issue_books"))
    );
}
