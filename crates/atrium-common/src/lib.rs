//! # atrium-common
//!
//! Shared utilities including configuration, error handling, session tokens,
//! password hashing, telemetry, and avatar file storage.

pub mod auth;
pub mod config;
pub mod error;
pub mod storage;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, Claims, JwtService, PasswordService, SESSION_COOKIE};
pub use config::{
    AppConfig, AppSettings, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    MailConfig, MailProviderKind, RateLimitConfig, ServerConfig, SessionConfig, StorageConfig,
    ThemeConfig,
};
pub use error::{AppError, AppResult};
pub use storage::LocalAvatarStorage;
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
