//! Response DTOs
//!
//! Views of a user for templates and JSON, service outcomes, and health bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// The logged-in user as shown to themselves
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Public URL of the avatar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub verified: bool,
    /// Address waiting for confirmation after an email change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of a successful signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Account is usable right away
    Created(CurrentUserResponse),
    /// A confirmation link was mailed to this address
    VerificationSent { email: String },
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Session token for the `auth_token` cookie
    pub token: String,
    /// Cookie lifetime in seconds
    pub max_age: i64,
    pub user: CurrentUserResponse,
}

/// Result of a profile update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdateOutcome {
    pub user: CurrentUserResponse,
    /// Set when a confirmation link was mailed to a new address
    pub verification_sent_to: Option<String>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Database health map returned by `/health`
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseHealth {
    /// `up` or `down`
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub open_connections: u32,
    pub in_use: u32,
    pub idle: u32,
    pub max_connections: u32,
}

impl DatabaseHealth {
    pub fn is_up(&self) -> bool {
        self.status == "up"
    }
}

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: DatabaseHealth,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
