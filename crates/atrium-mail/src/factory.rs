//! Builds the configured provider

use std::sync::Arc;

use atrium_common::{MailConfig, MailProviderKind};
use atrium_core::MailProvider;
use tracing::info;

use crate::{ConsoleMailer, DisabledMailer, MailSetupError, ResendMailer};

/// Create the mail provider selected by `MAIL_PROVIDER`
///
/// # Errors
/// Returns an error if the Resend provider is selected without credentials
pub fn new_mail_provider(
    app_name: &str,
    config: &MailConfig,
) -> Result<Arc<dyn MailProvider>, MailSetupError> {
    if !config.enabled {
        info!("Mail disabled");
        return Ok(Arc::new(DisabledMailer));
    }

    let provider: Arc<dyn MailProvider> = match config.provider {
        MailProviderKind::Console => Arc::new(ConsoleMailer::new()),
        MailProviderKind::Resend => {
            let api_key = config
                .resend_api_key
                .as_deref()
                .ok_or(MailSetupError::MissingSetting("RESEND_API_KEY"))?;
            let from = config
                .from_email
                .as_deref()
                .ok_or(MailSetupError::MissingSetting("RESEND_FROM_EMAIL"))?;
            Arc::new(ResendMailer::new(api_key, app_name, from)?)
        }
    };

    info!(provider = provider.name(), "Mail provider ready");
    Ok(provider)
}
