//! Session extractors
//!
//! Resolve the `auth_token` cookie to the logged-in user.

use atrium_common::SESSION_COOKIE;
use atrium_core::User;
use atrium_service::AuthService;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::state::AppState;

/// Resolved session, cached on the request so it is looked up once
#[derive(Debug, Clone)]
struct ResolvedSession(Option<User>);

async fn resolve_session<S>(parts: &mut Parts, state: &S) -> Option<User>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    if let Some(ResolvedSession(user)) = parts.extensions.get::<ResolvedSession>() {
        return user.clone();
    }

    let jar = CookieJar::from_headers(&parts.headers);
    let user = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            let app_state = AppState::from_ref(state);
            AuthService::new(app_state.service_context())
                .user_from_session(cookie.value())
                .await
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Failed to resolve session");
                    None
                })
        }
        None => None,
    };

    parts.extensions.insert(ResolvedSession(user.clone()));
    user
}

/// A logged-in user; pages behind it redirect anonymous visitors
#[derive(Debug, Clone)]
pub struct SessionUser(pub User);

/// Why a protected page refused the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRejection {
    /// Accounts are turned off entirely
    AuthDisabled,
    /// No valid session cookie
    LoginRequired,
}

impl SessionRejection {
    pub fn location(self) -> &'static str {
        match self {
            Self::AuthDisabled => "/",
            Self::LoginRequired => "/auth/login",
        }
    }
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        Redirect::temporary(self.location()).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !AppState::from_ref(state).config().auth.enable_auth {
            return Err(SessionRejection::AuthDisabled);
        }

        resolve_session(parts, state)
            .await
            .map(SessionUser)
            .ok_or(SessionRejection::LoginRequired)
    }
}

/// The logged-in user, if any
#[derive(Debug, Clone)]
pub struct OptionalSessionUser(pub Option<User>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalSessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalSessionUser(resolve_session(parts, state).await))
    }
}
