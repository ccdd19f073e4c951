//! Server-rendered HTML
//!
//! Pages are full documents sharing one layout; fragments are the snippets
//! htmx swaps in after a form post. Every interpolated value is escaped.

mod fragments;
mod layout;
pub mod pages;

pub use fragments::{
    account_created, error_alert, hello, login_success, password_updated, profile_section,
    reset_requested, success_alert, verification_sent,
};
pub use layout::{layout, PageContext, THEMES};
