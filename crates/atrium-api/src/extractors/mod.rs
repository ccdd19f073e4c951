//! Axum extractors for request handling
//!
//! Custom extractors for sessions, page context, and validated forms.

mod page;
mod profile_form;
mod session;
mod validated;

pub use page::{Page, THEME_COOKIE};
pub use profile_form::ProfileForm;
pub use session::{OptionalSessionUser, SessionRejection, SessionUser};
pub use validated::ValidatedForm;
