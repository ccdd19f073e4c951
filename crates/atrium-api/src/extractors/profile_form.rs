//! Multipart profile form extractor

use atrium_core::DomainError;
use atrium_service::{AvatarUpload, UpdateProfileRequest};
use axum::{
    async_trait,
    extract::{FromRef, FromRequest, Multipart, Request},
    http::StatusCode,
};

use crate::response::ApiError;
use crate::state::AppState;

/// `username`, `email`, and an optional `avatar` file from a multipart body
///
/// An empty file part (no file chosen) counts as no avatar.
#[derive(Debug, Clone)]
pub struct ProfileForm(pub UpdateProfileRequest);

#[async_trait]
impl<S> FromRequest<S> for ProfileForm
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let max_mb = AppState::from_ref(state).config().storage.max_file_size_mb;
        let too_large = || ApiError::Domain(DomainError::AvatarTooLarge { max_mb });

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_form(e.body_text()))?;

        let mut username = None;
        let mut email = None;
        let mut avatar = None;

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => return Err(too_large()),
                Err(e) => return Err(ApiError::invalid_form(e.body_text())),
            };

            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "username" => {
                    username = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| ApiError::invalid_form(e.body_text()))?,
                    );
                }
                "email" => {
                    email = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| ApiError::invalid_form(e.body_text()))?,
                    );
                }
                "avatar" => {
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let bytes = field.bytes().await.map_err(|e| {
                        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                            too_large()
                        } else {
                            ApiError::invalid_form(e.body_text())
                        }
                    })?;
                    if !bytes.is_empty() {
                        avatar = Some(AvatarUpload {
                            content_type,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                _ => {}
            }
        }

        let (Some(username), Some(email)) = (username, email) else {
            return Err(ApiError::invalid_form("Please fill in all required fields"));
        };

        Ok(ProfileForm(UpdateProfileRequest {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            avatar,
        }))
    }
}
