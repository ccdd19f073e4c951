//! Profile service
//!
//! Username, email, and avatar changes from the profile page.

use atrium_core::entities::User;
use atrium_core::DomainError;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{validation_messages, AvatarUpload, CurrentUserResponse, ProfileUpdateOutcome, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::verification::VerificationService;

/// File extension for an accepted avatar MIME type
pub fn avatar_extension(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.as_str() {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Check an upload against the accepted types and size limit
    fn check_avatar(&self, avatar: &AvatarUpload) -> Result<&'static str, DomainError> {
        let ext =
            avatar_extension(&avatar.content_type).ok_or(DomainError::UnsupportedAvatarType)?;

        let storage = &self.ctx.config().storage;
        if avatar.bytes.len() > storage.max_file_size_bytes() {
            return Err(DomainError::AvatarTooLarge {
                max_mb: storage.max_file_size_mb,
            });
        }
        Ok(ext)
    }

    /// Apply a profile form to `user`
    ///
    /// With email verification enabled, a new address only becomes active
    /// once confirmed through the mailed link.
    #[instrument(skip(self, user, request), fields(user_id = %user.id))]
    pub async fn update_profile(
        &self,
        mut user: User,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileUpdateOutcome> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(validation_messages(&e).join(". ")))?;

        let repo = self.ctx.user_repo();
        let auth = &self.ctx.config().auth;

        // Reject a bad file before touching anything
        let avatar = match request.avatar.as_ref().filter(|_| auth.avatar_enabled()) {
            Some(upload) if !upload.bytes.is_empty() => Some((upload, self.check_avatar(upload)?)),
            _ => None,
        };

        if request.username != user.username {
            if repo.username_exists(&request.username).await? {
                return Err(DomainError::UsernameAlreadyExists.into());
            }
            user.set_username(request.username);
        }

        let mut verification_sent_to = None;
        if request.email != user.email {
            if repo.email_exists(&request.email).await? {
                return Err(DomainError::EmailAlreadyExists.into());
            }
            if auth.verify_email_enabled() {
                verification_sent_to = Some(request.email);
            } else {
                user.set_email(request.email);
            }
        }

        let previous_avatar = user.avatar.clone();
        let mut stored_avatar = None;
        if let Some((upload, ext)) = avatar {
            let file_name = format!("{}-{}.{ext}", user.id, Uuid::new_v4().simple());
            let path = self
                .ctx
                .avatar_storage()
                .store(&file_name, &upload.bytes)
                .await?;
            user.set_avatar(Some(path.clone()));
            stored_avatar = Some(path);
        }

        if let Err(e) = repo.update(&user).await {
            if let Some(path) = stored_avatar {
                let _ = self.ctx.avatar_storage().remove(&path).await;
            }
            return Err(e.into());
        }

        if stored_avatar.is_some() {
            if let Some(old) = previous_avatar {
                if let Err(e) = self.ctx.avatar_storage().remove(&old).await {
                    warn!(path = %old, error = %e, "Failed to delete previous avatar");
                }
            }
        }

        if let Some(email) = verification_sent_to.clone() {
            VerificationService::new(self.ctx)
                .send_verification(&mut user, email)
                .await?;
        }

        info!("Profile updated");
        Ok(ProfileUpdateOutcome {
            user: CurrentUserResponse::from(&user),
            verification_sent_to,
        })
    }
}
