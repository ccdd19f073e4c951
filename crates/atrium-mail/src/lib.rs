//! # atrium-mail
//!
//! Outbound mail: provider implementations of the `MailProvider` port and the
//! messages sent for email verification and password reset.

mod console;
mod disabled;
mod error;
mod factory;
mod resend;
pub mod templates;

pub use console::ConsoleMailer;
pub use disabled::DisabledMailer;
pub use error::MailSetupError;
pub use factory::new_mail_provider;
pub use resend::ResendMailer;
pub use templates::{password_reset_mail, verification_mail};
