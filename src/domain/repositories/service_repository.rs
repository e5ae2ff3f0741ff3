//! Repository trait for services and their images.

use crate::domain::entities::{Service, ServiceDetails, ServiceFilter, ServiceInput, StoreScope};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for services.
///
/// Every mutation takes a [`StoreScope`]. Implementations verify that the
/// store belongs to the scope's user and apply the change in one atomic
/// unit, so no reader ever observes a half-applied update (for example a
/// service whose images were cleared but not yet recreated).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgServiceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Finds a service by id, including its images and category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<ServiceDetails>, AppError>;

    /// Lists the services of a store, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        store_id: &str,
        filter: ServiceFilter,
    ) -> Result<Vec<ServiceDetails>, AppError>;

    /// Creates a service and its images in the scoped store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreNotOwned`] if the scope's user does not own the store.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(
        &self,
        scope: &StoreScope,
        input: ServiceInput,
    ) -> Result<ServiceDetails, AppError>;

    /// Updates scalar fields and replaces the whole image set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreNotOwned`] if the scope's user does not own the store.
    /// Returns [`AppError::NotFound`] if the service is not in the scoped store.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        scope: &StoreScope,
        id: &str,
        input: ServiceInput,
    ) -> Result<ServiceDetails, AppError>;

    /// Deletes a service and its images, returning the deleted record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreNotOwned`] if the scope's user does not own the store.
    /// Returns [`AppError::NotFound`] if the service is not in the scoped store.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, scope: &StoreScope, id: &str) -> Result<Service, AppError>;
}
