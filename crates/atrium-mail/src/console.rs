//! Console provider: writes messages to the log instead of sending them

use async_trait::async_trait;
use atrium_core::{DomainError, MailProvider, OutgoingMail};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailProvider for ConsoleMailer {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn send(&self, mail: &OutgoingMail) -> Result<(), DomainError> {
        info!(
            to = %mail.to,
            subject = %mail.subject,
            body = %mail.html,
            "Email sent"
        );
        Ok(())
    }
}
