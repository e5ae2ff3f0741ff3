//! Store lookup and ownership checks.

use std::sync::Arc;

use crate::domain::entities::{NewStore, Store};
use crate::domain::repositories::StoreRepository;
use crate::error::AppError;

/// Service for stores and the "store belongs to user" predicate.
pub struct StoreService {
    repository: Arc<dyn StoreRepository>,
}

impl StoreService {
    /// Creates a new store service.
    pub fn new(repository: Arc<dyn StoreRepository>) -> Self {
        Self { repository }
    }

    /// Returns the store if `user_id` owns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreNotOwned`] if the store is missing or owned by
    /// another user.
    pub async fn get_owned(&self, store_id: &str, user_id: &str) -> Result<Store, AppError> {
        self.repository
            .find_owned(store_id, user_id)
            .await?
            .ok_or(AppError::StoreNotOwned)
    }

    /// Lists the stores owned by `user_id`.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Store>, AppError> {
        self.repository.list(Some(user_id.to_string())).await
    }

    /// Lists every store. Used by the admin CLI.
    pub async fn list_all(&self) -> Result<Vec<Store>, AppError> {
        self.repository.list(None).await
    }

    /// Creates a store owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    pub async fn create_store(&self, name: &str, user_id: &str) -> Result<Store, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request("Name is required"));
        }
        if user_id.trim().is_empty() {
            return Err(AppError::bad_request("User id is required"));
        }

        self.repository
            .create(NewStore {
                name: name.to_string(),
                user_id: user_id.to_string(),
            })
            .await
    }

    /// Checks that the backing database answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
