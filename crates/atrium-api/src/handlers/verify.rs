//! Email verification handler

use atrium_service::{CurrentUserResponse, TokenQuery, VerificationService};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};

use crate::extractors::Page;
use crate::response::ApiError;
use crate::state::AppState;
use crate::views::pages;

/// Consume a verification link and show the result
///
/// GET /auth/verify-email?token=
pub async fn verify_email(
    State(state): State<AppState>,
    Page(mut ctx): Page,
    Query(query): Query<TokenQuery>,
) -> (StatusCode, Html<String>) {
    let service = VerificationService::new(state.service_context());
    match service.verify_email(&query.token).await {
        Ok(user) => {
            let user = CurrentUserResponse::from(user);
            // The navigation should show the confirmed address
            if ctx.user.as_ref().is_some_and(|current| current.id == user.id) {
                ctx.user = Some(user.clone());
            }
            (StatusCode::OK, Html(pages::verify_email(&ctx, Ok(&user))))
        }
        Err(e) => {
            let e = ApiError::from(e);
            let messages = e.user_messages();
            let reason = messages.first().map_or("", String::as_str);
            (e.status_code(), Html(pages::verify_email(&ctx, Err(reason))))
        }
    }
}
