//! Service implementations

pub mod auth;
pub mod context;
pub mod error;
pub mod health;
pub mod password_reset;
pub mod profile;
pub mod verification;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use password_reset::PasswordResetService;
pub use profile::{avatar_extension, ProfileService};
pub use verification::VerificationService;
