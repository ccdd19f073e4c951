//! Data transfer objects for requests and responses
//!
//! - Request DTOs with validation for form inputs
//! - Response DTOs for views and JSON outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

use validator::{ValidationErrors, ValidationErrorsKind};

pub use requests::{
    AvatarUpload, ForgetPasswordRequest, HelloRequest, LoginRequest, ResetPasswordRequest,
    SignupRequest, ThemeRequest, TokenQuery, UpdateProfileRequest,
};
pub use responses::{
    CurrentUserResponse, DatabaseHealth, HealthResponse, LoginOutcome, ProfileUpdateOutcome,
    ReadinessResponse, SignupOutcome,
};

/// Flatten validation errors into user-facing messages, ordered by field name
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let mut messages = Vec::new();
    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let message = err
                        .message
                        .as_ref()
                        .map_or_else(|| format!("{field} is invalid"), ToString::to_string);
                    if !messages.contains(&message) {
                        messages.push(message);
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => messages.extend(validation_messages(nested)),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    messages.extend(validation_messages(nested));
                }
            }
        }
    }
    messages
}
