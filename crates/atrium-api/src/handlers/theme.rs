//! Theme switcher

use atrium_service::ThemeRequest;
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::extractors::THEME_COOKIE;
use crate::response::{ApiError, ApiResult, HxRefresh};

/// Store the chosen theme and reload the page
///
/// POST /theme
pub async fn set_theme(
    jar: CookieJar,
    Form(request): Form<ThemeRequest>,
) -> ApiResult<(CookieJar, HxRefresh)> {
    let jar = match request.theme.as_str() {
        "system" | "" => jar.remove(Cookie::build(THEME_COOKIE).path("/")),
        theme @ ("light" | "dark") => jar.add(
            Cookie::build((THEME_COOKIE, theme.to_string()))
                .path("/")
                .same_site(SameSite::Lax),
        ),
        _ => return Err(ApiError::invalid_form("Unknown theme")),
    };

    Ok((jar, HxRefresh))
}
