//! Service context - dependency container for services
//!
//! Holds the configuration, repository, mail provider, avatar storage, and
//! session token service needed by services.

use std::sync::Arc;

use atrium_common::auth::JwtService;
use atrium_common::AppConfig;
use atrium_core::traits::{AvatarStorage, MailProvider, UserRepository};
use atrium_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (health checks)
    pool: PgPool,

    config: Arc<AppConfig>,

    user_repo: Arc<dyn UserRepository>,
    mailer: Arc<dyn MailProvider>,
    avatar_storage: Arc<dyn AvatarStorage>,

    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        config: Arc<AppConfig>,
        user_repo: Arc<dyn UserRepository>,
        mailer: Arc<dyn MailProvider>,
        avatar_storage: Arc<dyn AvatarStorage>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            config,
            user_repo,
            mailer,
            avatar_storage,
            jwt_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        self.config.as_ref()
    }

    /// Shared handle to the configuration
    pub fn config_arc(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the mail provider
    pub fn mailer(&self) -> &dyn MailProvider {
        self.mailer.as_ref()
    }

    /// Get the avatar storage
    pub fn avatar_storage(&self) -> &dyn AvatarStorage {
        self.avatar_storage.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("mailer", &self.mailer.name())
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    config: Option<Arc<AppConfig>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    mailer: Option<Arc<dyn MailProvider>>,
    avatar_storage: Option<Arc<dyn AvatarStorage>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn config(mut self, config: Arc<AppConfig>) -> Self {
        self.config = Some(config);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn MailProvider>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn avatar_storage(mut self, storage: Arc<dyn AvatarStorage>) -> Self {
        self.avatar_storage = Some(storage);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// When no JWT service is supplied one is derived from the session settings.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::validation("config is required"))?;
        let jwt_service = self.jwt_service.unwrap_or_else(|| {
            Arc::new(JwtService::new(
                &config.session.secret,
                config.session.ttl_seconds,
            ))
        });

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            config,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.mailer
                .ok_or_else(|| ServiceError::validation("mailer is required"))?,
            self.avatar_storage
                .ok_or_else(|| ServiceError::validation("avatar_storage is required"))?,
            jwt_service,
        ))
    }
}
