//! PostgreSQL implementation of token repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{ApiToken, TokenRepository};
use crate::error::AppError;

/// PostgreSQL repository for API token storage and validation.
///
/// Stores hashed tokens only. Raw tokens are never persisted.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn find_user_id(&self, token_hash: &str) -> Result<Option<String>, AppError> {
        let user_id = sqlx::query_scalar!(
            r#"
            SELECT user_id
            FROM api_tokens
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
            token_hash
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user_id)
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query!(
            r#"
            UPDATE api_tokens
            SET last_used_at = NOW()
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
            token_hash
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn create_token(
        &self,
        user_id: &str,
        name: &str,
        token_hash: &str,
    ) -> Result<ApiToken, AppError> {
        let token = sqlx::query_as!(
            ApiToken,
            r#"
            INSERT INTO api_tokens (user_id, name, token_hash)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, token_hash, created_at, last_used_at, revoked_at
            "#,
            user_id,
            name,
            token_hash
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(token)
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        let tokens = sqlx::query_as!(
            ApiToken,
            r#"
            SELECT id, user_id, name, token_hash, created_at, last_used_at, revoked_at
            FROM api_tokens
            ORDER BY created_at DESC
            "#
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(tokens)
    }

    async fn find_by_name_or_id(&self, name_or_id: &str) -> Result<Option<ApiToken>, AppError> {
        let id = name_or_id.parse::<i64>().ok();

        let token = sqlx::query_as!(
            ApiToken,
            r#"
            SELECT id, user_id, name, token_hash, created_at, last_used_at, revoked_at
            FROM api_tokens
            WHERE name = $1 OR id = $2
            ORDER BY revoked_at NULLS FIRST, created_at DESC
            LIMIT 1
            "#,
            name_or_id,
            id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(token)
    }

    async fn revoke(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query!(
            r#"
            UPDATE api_tokens SET revoked_at = NOW()
            WHERE id = $1 AND revoked_at IS NULL
            "#,
            id
        )
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Token not found or already revoked"));
        }

        Ok(())
    }
}
