//! One-time tokens for email verification and password reset links
//!
//! Tokens are random UUID v4 strings. A token is valid for
//! [`TOKEN_VALIDITY_HOURS`] after it was issued and is cleared when consumed.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Validity window of verification and reset tokens
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// A freshly issued single-use token together with its issue time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeToken {
    value: String,
    issued_at: DateTime<Utc>,
}

impl OneTimeToken {
    /// Issue a new random token stamped with the current time
    pub fn generate() -> Self {
        Self::generate_at(Utc::now())
    }

    /// Issue a new random token stamped with the given time
    pub fn generate_at(issued_at: DateTime<Utc>) -> Self {
        Self {
            value: Uuid::new_v4().simple().to_string(),
            issued_at,
        }
    }

    /// The token string embedded in links
    pub fn value(&self) -> &str {
        &self.value
    }

    /// When the token was issued
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Instant after which a token issued at `issued_at` is rejected
    pub fn expires_at(issued_at: DateTime<Utc>) -> DateTime<Utc> {
        issued_at + Duration::hours(TOKEN_VALIDITY_HOURS)
    }

    /// Oldest issue time still accepted at `now`, exclusive
    ///
    /// Repositories filter on `issued_at > valid_since(now)`, which agrees
    /// with [`OneTimeToken::is_valid_at`].
    pub fn valid_since(now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::hours(TOKEN_VALIDITY_HOURS)
    }

    /// Check whether a token issued at `issued_at` is still usable at `now`
    ///
    /// A missing issue time means the token was never issued properly and is
    /// always rejected.
    pub fn is_valid_at(issued_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        issued_at.is_some_and(|issued| now < Self::expires_at(issued))
    }
}
