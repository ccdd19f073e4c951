//! Resend provider: delivers through `https://api.resend.com/emails`

use async_trait::async_trait;
use atrium_core::{DomainError, MailProvider, OutgoingMail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::error::MailSetupError;

const RESEND_API: &str = "https://api.resend.com/emails";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: String,
    /// Full `From` header, e.g. `Atrium <noreply@example.com>`
    from: String,
    endpoint: String,
}

impl ResendMailer {
    pub fn new(api_key: &str, app_name: &str, from_email: &str) -> Result<Self, MailSetupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(format!("{app_name}/mailer"))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            from: format_from(app_name, from_email),
            endpoint: RESEND_API.to_string(),
        })
    }

    /// Send to a different API base, used against local stand-ins
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

fn format_from(app_name: &str, from_email: &str) -> String {
    format!("{app_name} <{from_email}>")
}

#[async_trait]
impl MailProvider for ResendMailer {
    fn name(&self) -> &'static str {
        "resend"
    }

    #[instrument(skip(self, mail), fields(to = %mail.to, subject = %mail.subject))]
    async fn send(&self, mail: &OutgoingMail) -> Result<(), DomainError> {
        let body = SendEmailRequest {
            from: &self.from,
            to: [mail.to.as_str()],
            subject: &mail.subject,
            html: &mail.html,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                warn!(error = %e, "Resend request failed");
                DomainError::MailError(e.to_string())
            })?;

        let sent: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| DomainError::MailError(format!("Unexpected Resend response: {e}")))?;

        info!(email_id = %sent.id, "Email sent");
        Ok(())
    }
}

impl std::fmt::Debug for ResendMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendMailer")
            .field("from", &self.from)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
