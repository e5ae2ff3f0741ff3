//! Repository trait for stores.

use crate::domain::entities::{NewStore, Store};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stores and their ownership.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStoreRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Creates a new store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_store: NewStore) -> Result<Store, AppError>;

    /// Finds the store with `store_id` whose owner is `user_id`.
    ///
    /// Returns `Ok(None)` when the store does not exist or belongs to
    /// someone else; callers cannot tell the two apart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_owned(&self, store_id: &str, user_id: &str) -> Result<Option<Store>, AppError>;

    /// Lists stores, optionally only those owned by `user_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, user_id: Option<String>) -> Result<Vec<Store>, AppError>;

    /// Round-trips to the backing store. Used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
