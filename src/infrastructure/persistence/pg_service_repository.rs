//! PostgreSQL implementation of service repository.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{
    Category, Image, Service, ServiceDetails, ServiceFilter, ServiceInput, StoreScope,
};
use crate::domain::repositories::ServiceRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::lock_owned_store;

/// PostgreSQL repository for services, their images and categories.
///
/// Mutations run in a transaction that first locks the owning store row
/// `FOR SHARE`, so ownership cannot change between the check and the write.
pub struct PgServiceRepository {
    pool: Arc<PgPool>,
}

impl PgServiceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Loads images and categories for `services` with one query each.
async fn attach_relations(
    conn: &mut PgConnection,
    services: Vec<Service>,
) -> Result<Vec<ServiceDetails>, AppError> {
    if services.is_empty() {
        return Ok(Vec::new());
    }

    let service_ids: Vec<String> = services.iter().map(|s| s.id.clone()).collect();
    let category_ids: Vec<String> = services.iter().map(|s| s.category_id.clone()).collect();

    let images = sqlx::query_as!(
        Image,
        r#"
        SELECT id, service_id, url, created_at, updated_at
        FROM images
        WHERE service_id = ANY($1)
        ORDER BY created_at
        "#,
        &service_ids[..]
    )
    .fetch_all(&mut *conn)
    .await?;

    let categories = sqlx::query_as!(
        Category,
        r#"
        SELECT id, store_id, name, created_at, updated_at
        FROM categories
        WHERE id = ANY($1)
        "#,
        &category_ids[..]
    )
    .fetch_all(&mut *conn)
    .await?;

    let mut images_by_service: HashMap<String, Vec<Image>> = HashMap::new();
    for image in images {
        images_by_service
            .entry(image.service_id.clone())
            .or_default()
            .push(image);
    }

    let categories: HashMap<String, Category> = categories
        .into_iter()
        .map(|category| (category.id.clone(), category))
        .collect();

    Ok(services
        .into_iter()
        .map(|service| ServiceDetails {
            images: images_by_service.remove(&service.id).unwrap_or_default(),
            category: categories.get(&service.category_id).cloned(),
            service,
        })
        .collect())
}

async fn insert_images(
    conn: &mut PgConnection,
    service_id: &str,
    input: &ServiceInput,
) -> Result<(), AppError> {
    let urls: Vec<String> = input.images.iter().map(|i| i.url.clone()).collect();

    sqlx::query!(
        "INSERT INTO images (service_id, url) SELECT $1::TEXT, UNNEST($2::TEXT[])",
        service_id,
        &urls[..]
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn single_details(
    conn: &mut PgConnection,
    service: Service,
) -> Result<ServiceDetails, AppError> {
    attach_relations(conn, vec![service])
        .await?
        .pop()
        .ok_or_else(|| AppError::internal("Service vanished while loading relations"))
}

#[async_trait]
impl ServiceRepository for PgServiceRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<ServiceDetails>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let service = sqlx::query_as!(
            Service,
            r#"
            SELECT id, store_id, category_id, name, price, "time", is_featured, is_archived,
                   created_at, updated_at
            FROM services
            WHERE id = $1
            "#,
            id
        )
        .fetch_optional(&mut *conn)
        .await?;

        match service {
            Some(service) => Ok(Some(single_details(&mut conn, service).await?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        store_id: &str,
        filter: ServiceFilter,
    ) -> Result<Vec<ServiceDetails>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let services = sqlx::query_as!(
            Service,
            r#"
            SELECT id, store_id, category_id, name, price, "time", is_featured, is_archived,
                   created_at, updated_at
            FROM services
            WHERE store_id = $1
              AND is_archived = FALSE
              AND ($2::TEXT IS NULL OR category_id = $2)
              AND ($3::BOOLEAN IS NULL OR is_featured = $3)
            ORDER BY created_at DESC
            "#,
            store_id,
            filter.category_id.as_deref(),
            filter.is_featured
        )
        .fetch_all(&mut *conn)
        .await?;

        attach_relations(&mut conn, services).await
    }

    async fn create(
        &self,
        scope: &StoreScope,
        input: ServiceInput,
    ) -> Result<ServiceDetails, AppError> {
        let mut tx = self.pool.begin().await?;

        lock_owned_store(&mut tx, scope).await?;

        let service = sqlx::query_as!(
            Service,
            r#"
            INSERT INTO services (store_id, category_id, name, price, "time", is_featured, is_archived)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, store_id, category_id, name, price, "time", is_featured, is_archived,
                      created_at, updated_at
            "#,
            scope.store_id,
            input.category_id,
            input.name,
            input.price,
            input.time,
            input.is_featured.unwrap_or(false),
            input.is_archived.unwrap_or(false)
        )
        .fetch_one(&mut *tx)
        .await?;

        insert_images(&mut tx, &service.id, &input).await?;
        let details = single_details(&mut tx, service).await?;

        tx.commit().await?;
        Ok(details)
    }

    async fn update(
        &self,
        scope: &StoreScope,
        id: &str,
        input: ServiceInput,
    ) -> Result<ServiceDetails, AppError> {
        let mut tx = self.pool.begin().await?;

        lock_owned_store(&mut tx, scope).await?;

        let service = sqlx::query_as!(
            Service,
            r#"
            UPDATE services SET
                name        = $3,
                price       = $4,
                "time"      = $5,
                category_id = $6,
                is_featured = COALESCE($7::BOOLEAN, is_featured),
                is_archived = COALESCE($8::BOOLEAN, is_archived),
                updated_at  = NOW()
            WHERE id = $1 AND store_id = $2
            RETURNING id, store_id, category_id, name, price, "time", is_featured, is_archived,
                      created_at, updated_at
            "#,
            id,
            scope.store_id,
            input.name,
            input.price,
            input.time,
            input.category_id,
            input.is_featured,
            input.is_archived
        )
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found("Service not found"))?;

        sqlx::query!("DELETE FROM images WHERE service_id = $1", id)
            .execute(&mut *tx)
            .await?;

        insert_images(&mut tx, id, &input).await?;
        let details = single_details(&mut tx, service).await?;

        tx.commit().await?;
        Ok(details)
    }

    async fn delete(&self, scope: &StoreScope, id: &str) -> Result<Service, AppError> {
        let mut tx = self.pool.begin().await?;

        lock_owned_store(&mut tx, scope).await?;

        // Images go with the service through ON DELETE CASCADE.
        let service = sqlx::query_as!(
            Service,
            r#"
            DELETE FROM services
            WHERE id = $1 AND store_id = $2
            RETURNING id, store_id, category_id, name, price, "time", is_featured, is_archived,
                      created_at, updated_at
            "#,
            id,
            scope.store_id
        )
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found("Service not found"))?;

        tx.commit().await?;
        Ok(service)
    }
}
