//! Integration tests for registration, login, and token handling.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_and_login() {
    let app = TestApp::new().await;

    app.register("alice", "password123").await;
    let token = app.login("alice", "password123").await;

    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "username": "alice", "password": "different456" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "username": "alice", "password": "short" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_rejects_short_username() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "username": "ab", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    let wrong_password = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "alice", "password": "wrongpass" })),
            None,
        )
        .await;

    let unknown_user = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "nobody", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_protected_endpoints_require_token() {
    let app = TestApp::new().await;

    let no_token = app.request("GET", "/files", None, None).await;
    assert_eq!(no_token.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/files", None, Some("not-a-real-token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_is_reusable_across_requests() {
    let app = TestApp::new().await;
    let token = app.register_and_login("alice", "password123").await;

    // Stateless tokens keep working without any session store lookup.
    let first = app.request("GET", "/files", None, Some(&token)).await;
    let second = app.request("GET", "/files", None, Some(&token)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}
