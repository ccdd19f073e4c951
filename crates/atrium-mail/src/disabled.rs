//! Provider used when `ENABLE_MAIL=false`

use async_trait::async_trait;
use atrium_core::{DomainError, MailProvider, OutgoingMail};
use tracing::warn;

/// Refuses every message
#[derive(Debug, Clone, Default)]
pub struct DisabledMailer;

#[async_trait]
impl MailProvider for DisabledMailer {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn send(&self, mail: &OutgoingMail) -> Result<(), DomainError> {
        warn!(to = %mail.to, subject = %mail.subject, "Mail is disabled, message dropped");
        Err(DomainError::MailError("mail delivery is disabled".to_string()))
    }
}
