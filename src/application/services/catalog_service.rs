//! Service catalog: reading and mutating the services of a store.

use std::sync::Arc;

use crate::domain::entities::{Service, ServiceDetails, ServiceFilter, ServiceInput, StoreScope};
use crate::domain::repositories::ServiceRepository;
use crate::error::AppError;

/// Service for the catalog of bookable services.
///
/// Reads are public. Every mutation carries a [`StoreScope`] and is checked
/// for ownership by the repository in the same transaction as the write.
pub struct CatalogService {
    repository: Arc<dyn ServiceRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<dyn ServiceRepository>) -> Self {
        Self { repository }
    }

    /// Fetches a service with its images and category.
    ///
    /// A missing service is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_service(&self, id: &str) -> Result<Option<ServiceDetails>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Lists the non-archived services of a store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_services(
        &self,
        store_id: &str,
        filter: ServiceFilter,
    ) -> Result<Vec<ServiceDetails>, AppError> {
        self.repository.list(store_id, filter).await
    }

    /// Creates a service in the scoped store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreNotOwned`] if the caller does not own the store.
    pub async fn create_service(
        &self,
        scope: &StoreScope,
        input: ServiceInput,
    ) -> Result<ServiceDetails, AppError> {
        let created = self.repository.create(scope, input).await?;

        tracing::info!(
            store_id = %scope.store_id,
            service_id = %created.service.id,
            images = created.images.len(),
            "Service created"
        );

        Ok(created)
    }

    /// Updates a service, replacing its whole image set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreNotOwned`] if the caller does not own the store.
    /// Returns [`AppError::NotFound`] if the service is not in that store.
    pub async fn update_service(
        &self,
        scope: &StoreScope,
        id: &str,
        input: ServiceInput,
    ) -> Result<ServiceDetails, AppError> {
        let updated = self.repository.update(scope, id, input).await?;

        tracing::info!(
            store_id = %scope.store_id,
            service_id = %id,
            images = updated.images.len(),
            "Service updated"
        );

        Ok(updated)
    }

    /// Deletes a service and returns the deleted record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreNotOwned`] if the caller does not own the store.
    /// Returns [`AppError::NotFound`] if the service is not in that store.
    pub async fn delete_service(&self, scope: &StoreScope, id: &str) -> Result<Service, AppError> {
        let deleted = self.repository.delete(scope, id).await?;

        tracing::info!(store_id = %scope.store_id, service_id = %id, "Service deleted");

        Ok(deleted)
    }
}
