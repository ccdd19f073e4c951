//! Password reset handlers

use atrium_service::{ForgetPasswordRequest, PasswordResetService, ResetPasswordRequest, TokenQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};

use crate::extractors::{Page, ValidatedForm};
use crate::response::{ApiError, ApiResult, Fragment};
use crate::state::AppState;
use crate::views::{self, pages};

/// Forgot-password form
///
/// GET /auth/forget-password
pub async fn forget_password_page(Page(ctx): Page) -> Html<String> {
    Html(pages::forget_password(&ctx))
}

/// Mail a reset link; the answer never reveals whether the account exists
///
/// POST /auth/forget-password
pub async fn forget_password(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<ForgetPasswordRequest>,
) -> ApiResult<Fragment> {
    PasswordResetService::new(state.service_context())
        .request_reset(request)
        .await?;
    Ok(Fragment(views::reset_requested()))
}

/// New-password form, shown only for a live token
///
/// GET /auth/reset-password?token=
pub async fn reset_password_page(
    State(state): State<AppState>,
    Page(ctx): Page,
    Query(query): Query<TokenQuery>,
) -> (StatusCode, Html<String>) {
    let service = PasswordResetService::new(state.service_context());
    match service.check_token(&query.token).await {
        Ok(_) => (
            StatusCode::OK,
            Html(pages::reset_password(&ctx, Ok(&query.token))),
        ),
        Err(e) => {
            let e = ApiError::from(e);
            let status = e.status_code();
            let messages = e.user_messages();
            let reason = messages.first().map_or("", String::as_str);
            (status, Html(pages::reset_password(&ctx, Err(reason))))
        }
    }
}

/// Set the new password
///
/// POST /auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<ResetPasswordRequest>,
) -> ApiResult<Fragment> {
    PasswordResetService::new(state.service_context())
        .reset_password(request)
        .await?;
    Ok(Fragment(views::password_updated()))
}
