//! Mail provider construction errors

/// Errors raised while building a mail provider from configuration
#[derive(Debug, thiserror::Error)]
pub enum MailSetupError {
    #[error("Missing mail setting: {0}")]
    MissingSetting(&'static str),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
