//! Live server tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, SECRET_KEY
//!
//! Run with: cargo test -p integration-tests --test api_tests

use axum::http::StatusCode;
use integration_tests::{assert_status, check_test_env, fixtures::*, live_config, TestServer};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body = assert_status(response, StatusCode::OK).await.unwrap();

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["database"]["status"], "up");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup_and_duplicate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let form = SignupForm::unique();

    let response = server.post_form("/auth/signup", &form.fields()).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post_form("/auth/signup", &form.fields()).await.unwrap();
    let body = assert_status(response, StatusCode::CONFLICT).await.unwrap();
    assert!(body.contains("already exists"));
}

#[tokio::test]
async fn test_login_session_round_trip() {
    if !check_test_env().await {
        return;
    }

    let mut config = live_config().expect("config");
    config.auth.enable_verify_email = false;
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let form = SignupForm::unique();

    let response = server.post_form("/auth/signup", &form.fields()).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post_form("/auth/login", &form.login_fields()).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("hx-redirect")
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );
    assert_status(response, StatusCode::OK).await.unwrap();

    // The client keeps the session cookie
    let response = server.get("/protected").await.unwrap();
    let body = assert_status(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, "Protected. Access granted");

    let response = server.get("/api").await.unwrap();
    let body = assert_status(response, StatusCode::OK).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["user_id"].is_string());

    let response = server.get("/auth/logout").await.unwrap();
    assert_status(response, StatusCode::SEE_OTHER).await.unwrap();

    let response = server.get("/protected").await.unwrap();
    assert_status(response, StatusCode::TEMPORARY_REDIRECT)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unverified_login_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let form = SignupForm::unique();

    server.post_form("/auth/signup", &form.fields()).await.unwrap();

    let response = server.post_form("/auth/login", &form.login_fields()).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_forget_password_for_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_form("/auth/forget-password", &[("email", "nobody@example.com")])
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Static Tests
// ============================================================================

#[tokio::test]
async fn test_static_assets_served() {
    if !check_test_env().await {
        return;
    }

    let mut config = live_config().expect("config");
    config.storage.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../web").to_string();
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    let response = server.get("/public/robots.txt").await.unwrap();
    let body = assert_status(response, StatusCode::OK).await.unwrap();
    assert!(body.contains("User-agent"));

    let response = server.get("/assets/").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
