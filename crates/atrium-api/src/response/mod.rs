//! Response types and error handling for HTML endpoints
//!
//! Errors render as an alert fragment that htmx swaps into the page's
//! `#errors` container; successes render as fragments that clear it.

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use atrium_common::AppError;
use atrium_core::DomainError;
use atrium_service::{validation_messages, ServiceError};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::views;

/// Element that receives error fragments
pub const ERRORS_TARGET: &str = "#errors";

/// Event fired by success fragments to empty the error container
pub const CLEAR_ERRORS_EVENT: &str = "clearErrors";

pub const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");
pub const HX_REFRESH: HeaderName = HeaderName::from_static("hx-refresh");
pub const HX_RESWAP: HeaderName = HeaderName::from_static("hx-reswap");
pub const HX_RETARGET: HeaderName = HeaderName::from_static("hx-retarget");
pub const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

/// Message shown for any server-side failure
const GENERIC_SERVER_ERROR: &str = "Something went wrong. Please try again later.";

/// API error type rendered as an HTML alert
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Form body could not be read or decoded
    #[error("{0}")]
    InvalidForm(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => from_u16(e.status_code()),
            Self::Service(e) => from_u16(e.status_code()),
            Self::Domain(e) => {
                if e.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if e.is_authorization() {
                    StatusCode::FORBIDDEN
                } else if e.is_validation() {
                    StatusCode::BAD_REQUEST
                } else if e.is_conflict() {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Validation(_) | Self::InvalidForm(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidForm(_) => "INVALID_FORM",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid form error
    pub fn invalid_form(msg: impl Into<String>) -> Self {
        Self::InvalidForm(msg.into())
    }

    /// Messages safe to show the visitor
    pub fn user_messages(&self) -> Vec<String> {
        if self.status_code().is_server_error() {
            return vec![GENERIC_SERVER_ERROR.to_string()];
        }
        match self {
            Self::Validation(errors) => validation_messages(errors),
            other => vec![other.to_string()],
        }
    }
}

fn from_u16(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        }

        let body = views::error_alert(&self.user_messages());
        (
            status,
            [
                (HX_RETARGET, HeaderValue::from_static(ERRORS_TARGET)),
                (HX_RESWAP, HeaderValue::from_static("innerHTML")),
            ],
            Html(body),
        )
            .into_response()
    }
}

/// Type alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;

/// Success fragment (200) that also clears displayed errors
pub struct Fragment(pub String);

impl IntoResponse for Fragment {
    fn into_response(self) -> Response {
        (
            [(HX_TRIGGER, HeaderValue::from_static(CLEAR_ERRORS_EVENT))],
            Html(self.0),
        )
            .into_response()
    }
}

/// Fragment that makes htmx navigate to another page
pub struct HxRedirect {
    pub location: &'static str,
    pub body: String,
}

impl IntoResponse for HxRedirect {
    fn into_response(self) -> Response {
        (
            [
                (HX_REDIRECT, HeaderValue::from_static(self.location)),
                (HX_TRIGGER, HeaderValue::from_static(CLEAR_ERRORS_EVENT)),
            ],
            Html(self.body),
        )
            .into_response()
    }
}

/// Empty response asking htmx to reload the current page
pub struct HxRefresh;

impl IntoResponse for HxRefresh {
    fn into_response(self) -> Response {
        ([(HX_REFRESH, HeaderValue::from_static("true"))], Html(String::new())).into_response()
    }
}
