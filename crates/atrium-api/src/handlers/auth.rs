//! Authentication handlers
//!
//! Signup, login, and logout.

use atrium_common::SESSION_COOKIE;
use atrium_service::{AuthService, LoginRequest, SignupOutcome, SignupRequest};
use axum::{
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::extractors::{Page, ValidatedForm};
use crate::response::{ApiResult, Fragment, HxRedirect};
use crate::state::AppState;
use crate::views::{self, pages};

/// Signup form
///
/// GET /auth/signup
pub async fn signup_page(Page(ctx): Page) -> Html<String> {
    Html(pages::signup(&ctx))
}

/// Register a new account
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<SignupRequest>,
) -> ApiResult<Fragment> {
    let service = AuthService::new(state.service_context());
    let body = match service.signup(request).await? {
        SignupOutcome::VerificationSent { email } => views::verification_sent(&email),
        SignupOutcome::Created(user) => {
            views::account_created(&user, state.config().auth.login_enabled())
        }
    };
    Ok(Fragment(body))
}

/// Login form
///
/// GET /auth/login
pub async fn login_page(Page(ctx): Page) -> Html<String> {
    Html(pages::login(&ctx))
}

/// Login with email and password; sets the session cookie
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(request): ValidatedForm<LoginRequest>,
) -> ApiResult<(CookieJar, HxRedirect)> {
    let service = AuthService::new(state.service_context());
    let outcome = service.login(request).await?;

    let cookie = Cookie::build((SESSION_COOKIE, outcome.token))
        .http_only(true)
        .secure(state.config().session.cookie_secure)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::seconds(outcome.max_age));

    Ok((
        jar.add(cookie),
        HxRedirect {
            location: "/",
            body: views::login_success(&outcome.user),
        },
    ))
}

/// Drop the session cookie
///
/// GET /auth/logout
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        Redirect::to("/"),
    )
}
