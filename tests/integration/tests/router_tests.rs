//! Router tests
//!
//! Drive the full application router in-process against in-memory
//! adapters. No database or mail server is needed.
//!
//! Run with: cargo test -p integration-tests --test router_tests

use axum::http::StatusCode;
use integration_tests::{fixtures::*, Part, TestApp};

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_home_page_for_guest() {
    let app = TestApp::new();

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"<div id="errors""#));
    assert!(response.body.contains(r#"href="/auth/login""#));
    assert!(response.body.contains(r#"href="/auth/signup""#));
    assert!(response.body.contains("htmx-config"));
}

#[tokio::test]
async fn test_home_page_for_logged_in_user() {
    let app = TestApp::new();
    let (user, hash) = verified_user("alice", "alice@example.com");
    let cookie = app.session_cookie(user.id);
    app.t.users.insert(user, Some(&hash));

    let response = app.get_with_cookie("/", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Logged in as <strong>alice</strong>"));
    assert!(response.body.contains(r#"href="/auth/logout""#));
    assert!(!response.body.contains(r#"href="/auth/signup""#));
}

#[tokio::test]
async fn test_auth_pages_render() {
    let app = TestApp::new();

    for path in ["/auth/signup", "/auth/login", "/auth/forget-password"] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.body.contains("<form"), "{path}");
    }
}

#[tokio::test]
async fn test_hello_escapes_name() {
    let app = TestApp::new();

    let response = app
        .post_form("/hello", &[("name", "<b>Bob</b>")], None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "<div>Hello, &lt;b&gt;Bob&lt;/b&gt;</div>");
    assert_eq!(response.header("hx-trigger"), Some("clearErrors"));
}

#[tokio::test]
async fn test_api_greeting() {
    let app = TestApp::new();

    let response = app.get("/api").await;
    assert_eq!(response.status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["message"], "Hello World");
    assert!(json.get("user_id").is_none());

    let (user, hash) = verified_user("alice", "alice@example.com");
    let id = user.id;
    let cookie = app.session_cookie(id);
    app.t.users.insert(user, Some(&hash));

    let response = app.get_with_cookie("/api", Some(&cookie)).await;
    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["user_id"], id.to_string());
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = TestApp::new();

    let response = app.get("/").await;
    assert!(response.header("x-request-id").is_some());
}

// ============================================================================
// Signup
// ============================================================================

#[tokio::test]
async fn test_signup_sends_verification_mail() {
    let app = TestApp::new();
    let form = SignupForm::unique();

    let response = app.post_form("/auth/signup", &form.fields(), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&form.email));
    assert_eq!(response.header("hx-trigger"), Some("clearErrors"));

    let mail = app.t.mailer.last().expect("verification mail");
    assert_eq!(mail.to, form.email);
    assert!(mail.html.contains("/auth/verify-email?token="));

    let user = app.t.users.by_email(&form.email).unwrap();
    assert!(!user.is_verified());
}

#[tokio::test]
async fn test_signup_without_verification_creates_active_account() {
    let app = TestApp::with_config(|c| c.auth.enable_verify_email = false);
    let form = SignupForm::unique();

    let response = app.post_form("/auth/signup", &form.fields(), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Your account has been created"));
    assert!(app.t.mailer.sent().is_empty());
    assert!(app.t.users.by_email(&form.email).unwrap().is_verified());
}

#[tokio::test]
async fn test_signup_duplicate_email_is_conflict() {
    let app = TestApp::new();
    let form = SignupForm::unique();
    app.post_form("/auth/signup", &form.fields(), None).await;

    let mut second = SignupForm::unique();
    second.email = form.email.clone();
    let response = app.post_form("/auth/signup", &second.fields(), None).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(response.is_error_fragment());
    assert!(response.body.contains("Email already exists"));
    assert_eq!(app.t.users.len(), 1);
}

#[tokio::test]
async fn test_signup_validation_lists_every_problem() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/auth/signup",
            &[
                ("username", "ab"),
                ("email", "not-an-email"),
                ("password", "password123"),
                ("password_confirm", "password124"),
            ],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.is_error_fragment());
    assert!(response.body.contains("Username must be 3-20 characters long"));
    assert!(response.body.contains("Email is not a valid email"));
    assert!(response.body.contains("Passwords do not match"));
    assert!(app.t.users.is_empty());
}

#[tokio::test]
async fn test_signup_missing_fields_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post_form("/auth/signup", &[("username", "alice")], None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.is_error_fragment());
}

// ============================================================================
// Login / logout
// ============================================================================

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = TestApp::new();
    let (user, hash) = verified_user("alice", "alice@example.com");
    app.t.users.insert(user, Some(&hash));

    let response = app
        .post_form(
            "/auth/login",
            &[("email", "alice@example.com"), ("password", TEST_PASSWORD)],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("hx-redirect"), Some("/"));

    let cookie = response.set_cookie("auth_token").expect("session cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=86400"));
}

#[tokio::test]
async fn test_login_failures_are_generic() {
    let app = TestApp::new();
    let (user, hash) = verified_user("alice", "alice@example.com");
    app.t.users.insert(user, Some(&hash));

    let wrong_password = app
        .post_form(
            "/auth/login",
            &[("email", "alice@example.com"), ("password", "wrong-password")],
            None,
        )
        .await;
    let unknown_email = app
        .post_form(
            "/auth/login",
            &[("email", "nobody@example.com"), ("password", TEST_PASSWORD)],
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert!(wrong_password.is_error_fragment());
    assert!(wrong_password.set_cookie("auth_token").is_none());
}

#[tokio::test]
async fn test_login_requires_verified_email() {
    let app = TestApp::new();
    let form = SignupForm::unique();
    app.post_form("/auth/signup", &form.fields(), None).await;

    let response = app.post_form("/auth/login", &form.login_fields(), None).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.body.contains("Please verify your email address"));
    assert!(response.set_cookie("auth_token").is_none());
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let cookie = app.session_cookie(uuid::Uuid::new_v4());

    let response = app.get_with_cookie("/auth/logout", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), Some("/"));

    let cookie = response.set_cookie("auth_token").expect("removal cookie");
    assert!(cookie.contains("Max-Age=0"));
}

// ============================================================================
// Email verification
// ============================================================================

#[tokio::test]
async fn test_verify_email_activates_account() {
    let app = TestApp::new();
    let form = SignupForm::unique();
    app.post_form("/auth/signup", &form.fields(), None).await;

    let token = app
        .t
        .users
        .by_email(&form.email)
        .and_then(|user| user.verification_token)
        .expect("verification token");

    let response = app.get(&format!("/auth/verify-email?token={token}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("is now verified"));
    assert!(app.t.users.by_email(&form.email).unwrap().is_verified());

    // The link works once
    let response = app.get(&format!("/auth/verify-email?token={token}")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Invalid or expired verification link"));

    let response = app.post_form("/auth/login", &form.login_fields(), None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_verify_email_without_token() {
    let app = TestApp::new();

    let response = app.get("/auth/verify-email").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Invalid or expired verification link"));
}

// ============================================================================
// Password reset
// ============================================================================

#[tokio::test]
async fn test_forget_password_does_not_reveal_accounts() {
    let app = TestApp::new();
    let (user, hash) = verified_user("alice", "alice@example.com");
    app.t.users.insert(user, Some(&hash));

    let known = app
        .post_form("/auth/forget-password", &[("email", "alice@example.com")], None)
        .await;
    let unknown = app
        .post_form("/auth/forget-password", &[("email", "nobody@example.com")], None)
        .await;

    assert_eq!(known.status, StatusCode::OK);
    assert_eq!(unknown.status, StatusCode::OK);
    assert_eq!(known.body, unknown.body);
    assert_eq!(app.t.mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_reset_password_flow() {
    let app = TestApp::new();
    let (user, hash) = verified_user("alice", "alice@example.com");
    app.t.users.insert(user, Some(&hash));

    app.post_form("/auth/forget-password", &[("email", "alice@example.com")], None)
        .await;
    let token = app
        .t
        .users
        .by_email("alice@example.com")
        .and_then(|user| user.reset_token)
        .expect("reset token");
    let mail = app.t.mailer.last().expect("reset mail");
    assert!(mail.html.contains(&token));

    let page = app
        .get(&format!("/auth/reset-password?token={token}"))
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains(&token));

    let response = app
        .post_form(
            "/auth/reset-password",
            &[
                ("token", token.as_str()),
                ("password", "brand-new-password"),
                ("password_confirm", "brand-new-password"),
            ],
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Your password has been updated"));

    let response = app
        .post_form(
            "/auth/login",
            &[("email", "alice@example.com"), ("password", "brand-new-password")],
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Token is spent
    let page = app
        .get(&format!("/auth/reset-password?token={token}"))
        .await;
    assert_eq!(page.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reset_password_with_unknown_token() {
    let app = TestApp::new();

    let page = app.get("/auth/reset-password?token=nope").await;
    assert_eq!(page.status, StatusCode::BAD_REQUEST);
    assert!(page.body.contains("Invalid or expired reset link"));

    let response = app
        .post_form(
            "/auth/reset-password",
            &[
                ("token", "nope"),
                ("password", "brand-new-password"),
                ("password_confirm", "brand-new-password"),
            ],
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.is_error_fragment());
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_profile_page_requires_login() {
    let app = TestApp::new();

    let response = app.get("/profile/edit").await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), Some("/auth/login"));
}

#[tokio::test]
async fn test_profile_update_with_avatar() {
    let app = TestApp::with_config(|c| c.auth.enable_verify_email = false);
    let (user, hash) = verified_user("alice", "alice@example.com");
    let id = user.id;
    let cookie = app.session_cookie(id);
    app.t.users.insert(user, Some(&hash));

    let page = app.get_with_cookie("/profile/edit", Some(&cookie)).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains(r#"value="alice""#));

    let response = app
        .post_multipart(
            "/profile/edit",
            &[
                Part::Text {
                    name: "username",
                    value: "alice2",
                },
                Part::Text {
                    name: "email",
                    value: "alice2@example.com",
                },
                Part::File {
                    name: "avatar",
                    file_name: "me.png",
                    content_type: "image/png",
                    bytes: TINY_PNG,
                },
            ],
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert!(response.body.contains("Profile saved."));
    assert!(response.body.contains(r#"value="alice2""#));

    let stored = app.t.users.get(id).unwrap();
    assert_eq!(stored.username, "alice2");
    assert_eq!(stored.email, "alice2@example.com");

    let files = app.t.storage.files();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with(".png"));
    assert_eq!(app.t.storage.contents(&files[0]).unwrap(), TINY_PNG);
    assert!(response.body.contains(&format!("/uploads/{}", files[0])));
}

#[tokio::test]
async fn test_profile_email_change_waits_for_verification() {
    let app = TestApp::new();
    let (user, hash) = verified_user("alice", "alice@example.com");
    let id = user.id;
    let cookie = app.session_cookie(id);
    app.t.users.insert(user, Some(&hash));

    let response = app
        .post_multipart(
            "/profile/edit",
            &[
                Part::Text {
                    name: "username",
                    value: "alice",
                },
                Part::Text {
                    name: "email",
                    value: "new@example.com",
                },
            ],
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert!(response.body.contains("new@example.com"));

    let stored = app.t.users.get(id).unwrap();
    assert_eq!(stored.email, "alice@example.com");
    assert_eq!(stored.pending_email.as_deref(), Some("new@example.com"));
    assert_eq!(app.t.mailer.last().unwrap().to, "new@example.com");
}

#[tokio::test]
async fn test_profile_rejects_unsupported_avatar() {
    let app = TestApp::new();
    let (user, hash) = verified_user("alice", "alice@example.com");
    let cookie = app.session_cookie(user.id);
    app.t.users.insert(user, Some(&hash));

    let response = app
        .post_multipart(
            "/profile/edit",
            &[
                Part::Text {
                    name: "username",
                    value: "alice",
                },
                Part::Text {
                    name: "email",
                    value: "alice@example.com",
                },
                Part::File {
                    name: "avatar",
                    file_name: "notes.txt",
                    content_type: "text/plain",
                    bytes: b"hello",
                },
            ],
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.is_error_fragment());
    assert!(response.body.contains("Avatar must be a PNG, JPEG, GIF or WebP image"));
    assert!(app.t.storage.files().is_empty());
}

#[tokio::test]
async fn test_profile_rejects_oversized_avatar() {
    let app = TestApp::with_config(|c| c.storage.max_file_size_mb = 1);
    let (user, hash) = verified_user("alice", "alice@example.com");
    let cookie = app.session_cookie(user.id);
    app.t.users.insert(user, Some(&hash));

    let big = vec![0u8; 1024 * 1024 + 10];
    let response = app
        .post_multipart(
            "/profile/edit",
            &[
                Part::Text {
                    name: "username",
                    value: "alice",
                },
                Part::Text {
                    name: "email",
                    value: "alice@example.com",
                },
                Part::File {
                    name: "avatar",
                    file_name: "big.png",
                    content_type: "image/png",
                    bytes: &big,
                },
            ],
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Avatar must be at most 1 MB"));
    assert!(app.t.storage.files().is_empty());
}

#[tokio::test]
async fn test_profile_missing_fields() {
    let app = TestApp::new();
    let (user, hash) = verified_user("alice", "alice@example.com");
    let cookie = app.session_cookie(user.id);
    app.t.users.insert(user, Some(&hash));

    let response = app
        .post_multipart(
            "/profile/edit",
            &[Part::Text {
                name: "username",
                value: "alice",
            }],
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Please fill in all required fields"));
}

// ============================================================================
// Protected route
// ============================================================================

#[tokio::test]
async fn test_protected_redirects_guests_to_login() {
    let app = TestApp::new();

    let response = app.get("/protected").await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), Some("/auth/login"));
}

#[tokio::test]
async fn test_protected_with_session() {
    let app = TestApp::new();
    let (user, hash) = verified_user("alice", "alice@example.com");
    let cookie = app.session_cookie(user.id);
    app.t.users.insert(user, Some(&hash));

    let response = app.get_with_cookie("/protected", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Protected. Access granted");
}

#[tokio::test]
async fn test_protected_with_stale_session() {
    let app = TestApp::new();
    // Token for an account that no longer exists
    let cookie = app.session_cookie(uuid::Uuid::new_v4());

    let response = app.get_with_cookie("/protected", Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), Some("/auth/login"));
}

#[tokio::test]
async fn test_protected_when_auth_disabled() {
    let app = TestApp::with_config(|c| c.auth.enable_auth = false);

    let response = app.get("/protected").await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), Some("/"));
}

// ============================================================================
// Feature flags
// ============================================================================

#[tokio::test]
async fn test_disabled_auth_removes_routes() {
    let app = TestApp::with_config(|c| c.auth.enable_auth = false);

    for path in [
        "/auth/signup",
        "/auth/login",
        "/auth/logout",
        "/auth/forget-password",
        "/auth/verify-email",
        "/profile/edit",
    ] {
        assert_eq!(app.get(path).await.status, StatusCode::NOT_FOUND, "{path}");
    }

    let home = app.get("/").await;
    assert!(!home.body.contains("/auth/login"));
}

#[tokio::test]
async fn test_individual_flags_remove_routes() {
    let app = TestApp::with_config(|c| {
        c.auth.enable_registration = false;
        c.auth.enable_reset_password = false;
        c.auth.enable_verify_email = false;
    });

    assert_eq!(app.get("/auth/signup").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.get("/auth/forget-password").await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get("/auth/reset-password?token=x").await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get("/auth/verify-email?token=x").await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(app.get("/auth/login").await.status, StatusCode::OK);
}

// ============================================================================
// Theme
// ============================================================================

#[tokio::test]
async fn test_theme_switch_sets_cookie() {
    let app = TestApp::new();

    let response = app.post_form("/theme", &[("theme", "dark")], None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("hx-refresh"), Some("true"));
    let cookie = response.set_cookie("theme").expect("theme cookie");
    assert!(cookie.starts_with("theme=dark"));

    let page = app.get_with_cookie("/", Some("theme=dark")).await;
    assert!(page.body.contains(r#"data-theme="dark""#));
}

#[tokio::test]
async fn test_theme_system_clears_cookie() {
    let app = TestApp::new();

    let response = app
        .post_form("/theme", &[("theme", "system")], Some("theme=dark"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let cookie = response.set_cookie("theme").expect("removal cookie");
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_unknown_theme_is_rejected() {
    let app = TestApp::new();

    let response = app.post_form("/theme", &[("theme", "neon")], None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("Unknown theme"));
}

#[tokio::test]
async fn test_theme_switcher_disabled() {
    let app = TestApp::with_config(|c| c.theme.enable_theme_switcher = false);

    let response = app.post_form("/theme", &[("theme", "dark")], None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_reports_database_down() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database"]["status"], "down");
    assert!(json["database"]["error"]
        .as_str()
        .unwrap()
        .starts_with("db down"));
}

#[tokio::test]
async fn test_readiness_fails_without_database() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}
