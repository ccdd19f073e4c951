//! Ports implemented by the infrastructure crates

mod mail;
mod repositories;
mod storage;

pub use mail::{MailProvider, OutgoingMail};
pub use repositories::{RepoResult, UserRepository};
pub use storage::AvatarStorage;
