mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/auth/register",
            json!({
                "username": "nicola",
                "email": "nicola@example.com",
                "password": "pass_word!",
                "full_name": "Nicola D."
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["username"], "nicola");
    assert_eq!(body["user"]["email"], "nicola@example.com");
    assert_eq!(body["user"]["full_name"], "Nicola D.");
    assert_eq!(body["user"]["is_active"], true);
    assert!(body["user"]["id"].is_i64());
}

#[tokio::test]
async fn test_register_token_works_immediately() {
    let app = TestApp::new();

    let token = app
        .register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let (status, body) = app.get_authenticated("/api/users/me", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], true);
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["username"], "nicola");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new();

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let (status, body) = app
        .post(
            "/api/auth/register",
            json!({
                "username": "nicola",
                "email": "other@example.com",
                "password": "pass_word!"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["result"], false);
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let (status, body) = app
        .post(
            "/api/auth/register",
            json!({
                "username": "nicola2",
                "email": "nicola@example.com",
                "password": "pass_word!"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_register_invalid_username() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/auth/register",
            json!({
                "username": "n",
                "email": "nicola@example.com",
                "password": "pass_word!"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("minimum 3 characters"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/auth/register",
            json!({
                "username": "nicola",
                "email": "not-an-email",
                "password": "pass_word!"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_login_with_username() {
    let app = TestApp::new();

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            json!({
                "username": "nicola",
                "password": "pass_word!"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["username"], "nicola");
}

#[tokio::test]
async fn test_login_with_email() {
    let app = TestApp::new();

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            json!({
                "username": "nicola@example.com",
                "password": "pass_word!"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "nicola");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();

    app.register_user("nicola", "nicola@example.com", "Correct_Password!")
        .await;

    let (wrong_password_status, wrong_password_body) = app
        .post(
            "/api/auth/login",
            json!({
                "username": "nicola",
                "password": "Wrong_Password!"
            }),
        )
        .await;

    let (unknown_user_status, unknown_user_body) = app
        .post(
            "/api/auth/login",
            json!({
                "username": "ghost",
                "password": "Wrong_Password!"
            }),
        )
        .await;

    assert_eq!(wrong_password_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password_body, unknown_user_body);
    assert_eq!(wrong_password_body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_protected_route_without_header() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/users/me").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing or invalid authorization header");
}

#[tokio::test]
async fn test_protected_route_scheme_is_case_sensitive() {
    let app = TestApp::new();

    let token = app
        .register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let (status, body) = app
        .get_with_authorization("/api/users/me", &format!("bearer {}", token))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing or invalid authorization header");
}

#[tokio::test]
async fn test_protected_route_garbage_token() {
    let app = TestApp::new();

    let (status, body) = app
        .get_authenticated("/api/users/me", "not-a-real-token")
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_protected_route_tampered_token() {
    let app = TestApp::new();

    let token = app
        .register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let parts: Vec<&str> = token.split('.').collect();
    let mut signature = parts[2].to_string();
    let first = signature.remove(0);
    signature.insert(0, if first == 'A' { 'B' } else { 'A' });
    let tampered = format!("{}.{}.{}", parts[0], parts[1], signature);

    let (status, body) = app.get_authenticated("/api/users/me", &tampered).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_protected_route_expired_token() {
    let app = TestApp::new();

    app.register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let expired = app.issue_expired_token(1);
    let (status, body) = app.get_authenticated("/api/users/me", &expired).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_protected_route_token_for_unknown_user() {
    let app = TestApp::new();

    // Properly signed, unexpired, but no such account.
    let token = app.issue_token(9999, "ghost");
    let (status, body) = app.get_authenticated("/api/users/me", &token).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_storage_outage_is_not_unauthorized() {
    let app = TestApp::with_failing_user_storage();

    let token = app.issue_token(1, "nicola");
    let (status, body) = app.get_authenticated("/api/users/me", &token).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["result"], false);
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn test_login_storage_outage() {
    let app = TestApp::with_failing_user_storage();

    let (status, body) = app
        .post(
            "/api/auth/login",
            json!({
                "username": "nicola",
                "password": "pass_word!"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn test_unknown_path_without_token() {
    let app = TestApp::new();

    let (status, _body) = app.get("/api/does-not-exist").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_path_with_token() {
    let app = TestApp::new();

    let token = app
        .register_user("nicola", "nicola@example.com", "pass_word!")
        .await;

    let (status, _body) = app.get_authenticated("/api/does-not-exist", &token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_auth_workflow() {
    let app = TestApp::new();

    // 1. Register
    let (register_status, register_body) = app
        .post(
            "/api/auth/register",
            json!({
                "username": "nicola",
                "email": "nicola@example.com",
                "password": "pass_word!"
            }),
        )
        .await;
    assert_eq!(register_status, StatusCode::CREATED);
    let user_id = register_body["user"]["id"].as_i64().unwrap();

    // 2. Login
    let (login_status, login_body) = app
        .post(
            "/api/auth/login",
            json!({
                "username": "nicola",
                "password": "pass_word!"
            }),
        )
        .await;
    assert_eq!(login_status, StatusCode::OK);
    let token = login_body["access_token"].as_str().unwrap().to_string();

    // 3. Access a protected endpoint
    let (me_status, me_body) = app.get_authenticated("/api/users/me", &token).await;
    assert_eq!(me_status, StatusCode::OK);
    assert_eq!(me_body["data"]["id"].as_i64().unwrap(), user_id);
    assert_eq!(me_body["data"]["username"], "nicola");

    // 4. An invalid token is still rejected
    let (invalid_status, _) = app.get_authenticated("/api/users/me", "invalid").await;
    assert_eq!(invalid_status, StatusCode::UNAUTHORIZED);
}
