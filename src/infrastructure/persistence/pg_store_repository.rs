//! PostgreSQL implementation of store repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStore, Store};
use crate::domain::repositories::StoreRepository;
use crate::error::AppError;

/// PostgreSQL repository for stores.
pub struct PgStoreRepository {
    pool: Arc<PgPool>,
}

impl PgStoreRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn create(&self, new_store: NewStore) -> Result<Store, AppError> {
        let store = sqlx::query_as!(
            Store,
            r#"
            INSERT INTO stores (name, user_id)
            VALUES ($1, $2)
            RETURNING id, name, user_id, created_at, updated_at
            "#,
            new_store.name,
            new_store.user_id
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(store)
    }

    async fn find_owned(&self, store_id: &str, user_id: &str) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as!(
            Store,
            r#"
            SELECT id, name, user_id, created_at, updated_at
            FROM stores
            WHERE id = $1 AND user_id = $2
            "#,
            store_id,
            user_id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(store)
    }

    async fn list(&self, user_id: Option<String>) -> Result<Vec<Store>, AppError> {
        let stores = sqlx::query_as!(
            Store,
            r#"
            SELECT id, name, user_id, created_at, updated_at
            FROM stores
            WHERE ($1::TEXT IS NULL OR user_id = $1)
            ORDER BY created_at
            "#,
            user_id
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(stores)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query!("SELECT 1 AS one")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
