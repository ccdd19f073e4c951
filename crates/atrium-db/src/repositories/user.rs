//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use atrium_core::entities::User;
use atrium_core::value_objects::OneTimeToken;
use atrium_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_user_unique_violation, user_not_found};

const USER_COLUMNS: &str = r"
    id, username, email, password_hash, oauth_provider, oauth_id, avatar,
    verified_at, pending_email, verification_token, verification_requested_at,
    reset_token, reset_requested_at, created_at, updated_at, deleted_at
";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a single live user where `column = value`
    async fn find_one_by(&self, column: &'static str, value: &str) -> RepoResult<Option<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {column} = $1 AND deleted_at IS NULL"
        );
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.find_one_by("email", email).await
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        self.find_one_by("username", username).await
    }

    #[instrument(skip_all)]
    async fn find_by_verification_token(&self, token: &str) -> RepoResult<Option<User>> {
        self.find_one_by("verification_token", token).await
    }

    #[instrument(skip_all)]
    async fn find_by_reset_token(&self, token: &str) -> RepoResult<Option<User>> {
        self.find_one_by("reset_token", token).await
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        // Soft-deleted rows still hold the unique constraint
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user, password_hash), fields(user_id = %user.id))]
    async fn create(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (
                id, username, email, password_hash, oauth_provider, oauth_id, avatar,
                verified_at, pending_email, verification_token, verification_requested_at,
                reset_token, reset_requested_at, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.oauth_provider)
        .bind(&user.oauth_id)
        .bind(&user.avatar)
        .bind(user.verified_at)
        .bind(&user.pending_email)
        .bind(&user.verification_token)
        .bind(user.verification_requested_at)
        .bind(&user.reset_token)
        .bind(user.reset_requested_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_user_unique_violation)?;

        Ok(())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET username = $2,
                email = $3,
                avatar = $4,
                verified_at = $5,
                pending_email = $6,
                verification_token = $7,
                verification_requested_at = $8,
                reset_token = $9,
                reset_requested_at = $10,
                updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.avatar)
        .bind(user.verified_at)
        .bind(&user.pending_email)
        .bind(&user.verification_token)
        .bind(user.verification_requested_at)
        .bind(&user.reset_token)
        .bind(user.reset_requested_at)
        .execute(&self.pool)
        .await
        .map_err(map_user_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn purge_unverified(&self, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1 AND verified_at IS NULL
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, Option<String>>(
            r"
            SELECT password_hash FROM users WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.flatten())
    }

    #[instrument(skip_all)]
    async fn consume_reset_token(
        &self,
        token: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET password_hash = $2,
                reset_token = NULL,
                reset_requested_at = NULL,
                updated_at = $3
            WHERE reset_token = $1
              AND reset_requested_at > $4
              AND deleted_at IS NULL
            ",
        )
        .bind(token)
        .bind(password_hash)
        .bind(now)
        .bind(OneTimeToken::valid_since(now))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip_all)]
    async fn consume_verification_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<Option<User>> {
        let sql = format!(
            r"
            UPDATE users
            SET email = pending_email,
                verified_at = $2,
                pending_email = NULL,
                verification_token = NULL,
                verification_requested_at = NULL,
                updated_at = $2
            WHERE verification_token = $1
              AND verification_requested_at > $3
              AND pending_email IS NOT NULL
              AND deleted_at IS NULL
            RETURNING {USER_COLUMNS}
            "
        );
        let result = sqlx::query_as::<_, UserModel>(&sql)
            .bind(token)
            .bind(now)
            .bind(OneTimeToken::valid_since(now))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_user_unique_violation)?;

        Ok(result.map(User::from))
    }
}
