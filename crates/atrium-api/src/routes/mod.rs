//! Route definitions
//!
//! Routes for disabled features are never registered, so they answer 404.

use std::path::Path;

use atrium_common::AppConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{auth, health, home, password, profile, protected, theme, verify};
use crate::state::AppState;

/// Room left in a profile upload for the text fields and multipart framing
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the page router (excluding health for separate middleware handling)
pub fn create_router(config: &AppConfig) -> Router<AppState> {
    let mut router = Router::new()
        .route("/", get(home::home))
        .route("/hello", post(home::hello))
        .route("/api", get(home::hello_world))
        .route("/protected", get(protected::protected));

    if config.theme.enable_theme_switcher {
        router = router.route("/theme", post(theme::set_theme));
    }

    if config.auth.enable_auth {
        router = router
            .merge(auth_routes(config))
            .merge(profile_routes(config));
    }

    router
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Static assets, the public folder, and uploaded avatars
///
/// `ServeDir` answers 404 for directories without an `index.html`, so
/// nothing is ever listed.
pub fn static_routes(config: &AppConfig) -> Router<AppState> {
    let static_dir = Path::new(&config.storage.static_dir);
    let mut router = Router::new()
        .nest_service("/assets", ServeDir::new(static_dir.join("assets")))
        .nest_service("/public", ServeDir::new(static_dir.join("public")));

    if config.auth.avatar_enabled() {
        router = router.nest_service("/uploads", ServeDir::new(&config.storage.upload_dir));
    }

    router
}

/// Authentication routes, each group behind its own flag
fn auth_routes(config: &AppConfig) -> Router<AppState> {
    let flags = &config.auth;
    let mut router = Router::new();

    if flags.enable_registration {
        router = router.route("/auth/signup", get(auth::signup_page).post(auth::signup));
    }

    if flags.enable_login {
        router = router
            .route("/auth/login", get(auth::login_page).post(auth::login))
            .route("/auth/logout", get(auth::logout));
    }

    if flags.enable_reset_password {
        router = router
            .route(
                "/auth/forget-password",
                get(password::forget_password_page).post(password::forget_password),
            )
            .route(
                "/auth/reset-password",
                get(password::reset_password_page).post(password::reset_password),
            );
    }

    if flags.enable_verify_email {
        router = router.route("/auth/verify-email", get(verify::verify_email));
    }

    router
}

/// Profile routes; the body limit admits one avatar of the configured size
fn profile_routes(config: &AppConfig) -> Router<AppState> {
    let limit = config.storage.max_file_size_bytes() + MULTIPART_OVERHEAD_BYTES;

    Router::new().route(
        "/profile/edit",
        get(profile::edit_page)
            .post(profile::update)
            .layer(DefaultBodyLimit::max(limit)),
    )
}
