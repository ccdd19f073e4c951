//! Layout context extractor

use atrium_service::CurrentUserResponse;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;

use super::session::OptionalSessionUser;
use crate::state::AppState;
use crate::views::PageContext;

/// Cookie holding the visitor's theme choice
pub const THEME_COOKIE: &str = "theme";

/// Visitor and theme information for rendering a full page
#[derive(Debug, Clone)]
pub struct Page(pub PageContext);

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let OptionalSessionUser(user) = OptionalSessionUser::from_request_parts(parts, state).await?;
        let theme = CookieJar::from_headers(&parts.headers)
            .get(THEME_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|theme| !theme.is_empty());

        let app_state = AppState::from_ref(state);
        Ok(Page(PageContext::new(
            app_state.config(),
            user.as_ref().map(CurrentUserResponse::from),
            theme,
        )))
    }
}
