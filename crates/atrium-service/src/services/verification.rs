//! Email verification service
//!
//! Issues confirmation links for new or changed addresses and consumes them.

use atrium_core::entities::User;
use atrium_core::{DomainError, OneTimeToken};
use atrium_mail::verification_mail;
use chrono::{Duration, Utc};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Minimum gap between two automatically resent links
const RESEND_INTERVAL_MINUTES: i64 = 15;

const INVALID_LINK: &str = "Invalid or expired verification link";

/// Email verification service
pub struct VerificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VerificationService<'a> {
    /// Create a new VerificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a fresh token for `email`, persist it as pending, and mail the link
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn send_verification(&self, user: &mut User, email: String) -> ServiceResult<()> {
        let token = OneTimeToken::generate();
        user.begin_verification(email, &token);
        self.ctx.user_repo().update(user).await?;

        let config = self.ctx.config();
        let to = user.pending_email.as_deref().unwrap_or(&user.email);
        let mail = verification_mail(&config.app.name, &config.app.base_url, to, token.value());
        self.ctx.mailer().send(&mail).await?;

        info!("Verification email sent");
        Ok(())
    }

    /// Send a new link to an unverified user unless a recent one is still usable
    ///
    /// Returns whether a message was sent.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn resend_if_due(&self, user: &mut User) -> ServiceResult<bool> {
        let now = Utc::now();
        let recent = user
            .verification_requested_at
            .is_some_and(|at| now - at < Duration::minutes(RESEND_INTERVAL_MINUTES));
        if user.verification_token_valid_at(now) && recent {
            return Ok(false);
        }

        let email = user
            .pending_email
            .clone()
            .unwrap_or_else(|| user.email.clone());
        self.send_verification(user, email).await?;
        Ok(true)
    }

    /// Consume a verification token
    ///
    /// The pending address becomes the account email and the account is
    /// marked verified. Unknown or expired tokens yield one generic message.
    #[instrument(skip_all)]
    pub async fn verify_email(&self, token: &str) -> ServiceResult<User> {
        if token.is_empty() {
            return Err(ServiceError::validation(INVALID_LINK));
        }

        let holder = self
            .ctx
            .user_repo()
            .find_by_verification_token(token)
            .await?
            .ok_or_else(|| ServiceError::validation(INVALID_LINK))?;

        if let Some(pending) = holder.pending_email.as_deref() {
            if pending != holder.email {
                let taken = self
                    .ctx
                    .user_repo()
                    .find_by_email(pending)
                    .await?
                    .is_some_and(|other| other.id != holder.id);
                if taken {
                    warn!(user_id = %holder.id, "Pending email was taken meanwhile");
                    return Err(DomainError::EmailAlreadyExists.into());
                }
            }
        }

        // The lookup above may be stale; only the conditional write decides
        let user = self
            .ctx
            .user_repo()
            .consume_verification_token(token, Utc::now())
            .await?
            .ok_or_else(|| ServiceError::validation(INVALID_LINK))?;

        info!(user_id = %user.id, "Email verified");
        Ok(user)
    }
}
