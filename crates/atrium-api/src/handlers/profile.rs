//! Profile handlers

use atrium_service::{CurrentUserResponse, ProfileService};
use axum::{extract::State, response::Html};

use crate::extractors::{Page, ProfileForm, SessionUser};
use crate::response::{ApiResult, Fragment};
use crate::state::AppState;
use crate::views::{self, pages};

/// Profile page
///
/// GET /profile/edit
pub async fn edit_page(SessionUser(user): SessionUser, Page(ctx): Page) -> Html<String> {
    Html(pages::profile(&ctx, &CurrentUserResponse::from(&user)))
}

/// Apply the profile form
///
/// POST /profile/edit
pub async fn update(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    ProfileForm(request): ProfileForm,
) -> ApiResult<Fragment> {
    let outcome = ProfileService::new(state.service_context())
        .update_profile(user, request)
        .await?;

    let notice = match &outcome.verification_sent_to {
        Some(email) => format!(
            "Profile saved. We sent a verification link to {email}; the new address applies once confirmed."
        ),
        None => "Profile saved.".to_string(),
    };

    Ok(Fragment(views::profile_section(
        &outcome.user,
        state.config().auth.avatar_enabled(),
        Some(&notice),
    )))
}
