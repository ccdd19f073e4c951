//! Mail delivery port

use async_trait::async_trait;

use crate::error::DomainError;

/// A rendered message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    /// HTML body
    pub html: String,
}

/// Outbound mail provider (console, Resend, ...)
#[async_trait]
pub trait MailProvider: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &'static str;

    /// Deliver a single message
    async fn send(&self, mail: &OutgoingMail) -> Result<(), DomainError>;
}
