//! Store entity and the ownership scope used to guard mutations.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A tenant-scoped business owned by exactly one user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Store {
    /// Returns true if `user_id` is the recorded owner.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Input data for creating a new store.
#[derive(Debug, Clone)]
pub struct NewStore {
    pub name: String,
    pub user_id: String,
}

/// A store id paired with the caller that claims to own it.
///
/// Repositories check the pair inside the same transaction as the mutation
/// it guards and fail with [`crate::error::AppError::StoreNotOwned`] when the
/// store does not belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreScope {
    pub store_id: String,
    pub user_id: String,
}

impl StoreScope {
    pub fn new(store_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            store_id: store_id.into(),
            user_id: user_id.into(),
        }
    }
}
