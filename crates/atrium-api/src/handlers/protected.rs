//! Sample page behind the login check

use crate::extractors::SessionUser;

/// GET /protected
pub async fn protected(SessionUser(_user): SessionUser) -> &'static str {
    "Protected. Access granted"
}
