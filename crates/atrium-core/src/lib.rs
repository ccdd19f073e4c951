//! # atrium-core
//!
//! Domain layer containing the user entity, one-time token value objects, and the
//! ports (repository, mail, avatar storage) implemented by the infrastructure crates.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::User;
pub use error::DomainError;
pub use traits::{AvatarStorage, MailProvider, OutgoingMail, RepoResult, UserRepository};
pub use value_objects::{OneTimeToken, TOKEN_VALIDITY_HOURS};
