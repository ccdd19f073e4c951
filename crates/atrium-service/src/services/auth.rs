//! Authentication service
//!
//! Handles signup, login, and resolving a session token back to its user.

use atrium_common::auth::{hash_password, verify_password};
use atrium_core::entities::User;
use atrium_core::DomainError;
use chrono::Utc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{CurrentUserResponse, LoginOutcome, LoginRequest, SignupOutcome, SignupRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::verification::VerificationService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    ///
    /// With email verification enabled the account starts unverified and a
    /// confirmation link is mailed; otherwise it is usable immediately.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<SignupOutcome> {
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let verify = self.ctx.config().auth.verify_email_enabled();
        let mut user = User::new(Uuid::new_v4(), request.username, request.email);
        if !verify {
            user.mark_verified(Utc::now());
        }

        // A racing insert still trips the unique constraints
        self.ctx
            .user_repo()
            .create(&user, Some(&password_hash))
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        if verify {
            let email = user.email.clone();
            let sent = VerificationService::new(self.ctx)
                .send_verification(&mut user, email.clone())
                .await;
            if let Err(e) = sent {
                // Nobody can confirm the account, so free the email for a retry
                error!(user_id = %user.id, error = %e, "Verification email failed, undoing signup");
                self.ctx.user_repo().purge_unverified(user.id).await?;
                return Err(e);
            }
            return Ok(SignupOutcome::VerificationSent { email });
        }

        Ok(SignupOutcome::Created(CurrentUserResponse::from(&user)))
    }

    /// Login with email and password
    ///
    /// Unknown email, missing password, and wrong password all produce the
    /// same error.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginOutcome> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::invalid_credentials()
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::invalid_credentials()
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::invalid_credentials());
        }

        if self.ctx.config().auth.verify_email_enabled() && !user.is_verified() {
            warn!(user_id = %user.id, "Login refused: email not verified");
            VerificationService::new(self.ctx)
                .resend_if_due(&mut user)
                .await?;
            return Err(DomainError::EmailNotVerified.into());
        }

        let token = self
            .ctx
            .jwt_service()
            .issue_session(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginOutcome {
            token,
            max_age: self.ctx.jwt_service().session_ttl(),
            user: CurrentUserResponse::from(&user),
        })
    }

    /// Resolve a session token to a live user
    ///
    /// Invalid or expired tokens and deleted users resolve to `None`.
    #[instrument(skip_all)]
    pub async fn user_from_session(&self, token: &str) -> ServiceResult<Option<User>> {
        let Ok(user_id) = self.ctx.jwt_service().validate_session(token) else {
            return Ok(None);
        };

        Ok(self.ctx.user_repo().find_by_id(user_id).await?)
    }
}
