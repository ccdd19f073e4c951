//! Password reset service

use atrium_common::auth::hash_password;
use atrium_core::entities::User;
use atrium_core::OneTimeToken;
use atrium_mail::password_reset_mail;
use chrono::Utc;
use tracing::{error, info, instrument};

use crate::dto::{ForgetPasswordRequest, ResetPasswordRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const INVALID_LINK: &str = "Invalid or expired reset link";

/// Password reset service
pub struct PasswordResetService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PasswordResetService<'a> {
    /// Create a new PasswordResetService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mail a reset link if the address belongs to an account
    ///
    /// Succeeds the same way whether or not the account exists; delivery
    /// failures are logged rather than reported.
    #[instrument(skip(self, request))]
    pub async fn request_reset(&self, request: ForgetPasswordRequest) -> ServiceResult<()> {
        let Some(mut user) = self.ctx.user_repo().find_by_email(&request.email).await? else {
            info!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = OneTimeToken::generate();
        user.begin_password_reset(&token);
        self.ctx.user_repo().update(&user).await?;

        let config = self.ctx.config();
        let mail = password_reset_mail(
            &config.app.name,
            &config.app.base_url,
            &user.email,
            token.value(),
        );
        if let Err(e) = self.ctx.mailer().send(&mail).await {
            error!(user_id = %user.id, error = %e, "Failed to send password reset email");
        } else {
            info!(user_id = %user.id, "Password reset email sent");
        }

        Ok(())
    }

    /// Look up the account a reset token belongs to
    #[instrument(skip_all)]
    pub async fn check_token(&self, token: &str) -> ServiceResult<User> {
        if token.is_empty() {
            return Err(ServiceError::validation(INVALID_LINK));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_reset_token(token)
            .await?
            .filter(|user| user.reset_token_valid_at(Utc::now()))
            .ok_or_else(|| ServiceError::validation(INVALID_LINK))?;

        Ok(user)
    }

    /// Set a new password; the token is checked and cleared by the same write
    #[instrument(skip_all)]
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> ServiceResult<()> {
        let user = self.check_token(&request.token).await?;

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;
        let consumed = self
            .ctx
            .user_repo()
            .consume_reset_token(&request.token, &password_hash, Utc::now())
            .await?;
        if !consumed {
            return Err(ServiceError::validation(INVALID_LINK));
        }

        info!(user_id = %user.id, "Password reset");
        Ok(())
    }
}
