//! # atrium-service
//!
//! Application layer: account use cases (signup, login, password reset, email
//! verification, profile editing), request/response DTOs, and the dependency
//! container handed to every service.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dto::{
    validation_messages, AvatarUpload, CurrentUserResponse, DatabaseHealth, ForgetPasswordRequest,
    HealthResponse, HelloRequest, LoginOutcome, LoginRequest, ProfileUpdateOutcome,
    ReadinessResponse, ResetPasswordRequest, SignupOutcome, SignupRequest, ThemeRequest,
    TokenQuery, UpdateProfileRequest,
};
pub use services::{
    AuthService, HealthService, PasswordResetService, ProfileService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, VerificationService,
};
