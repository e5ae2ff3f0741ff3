//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! compile-time checked queries.
//!
//! # Repositories
//!
//! - [`PgStoreRepository`] - Stores and ownership lookups
//! - [`PgServiceRepository`] - Services, images and categories
//! - [`PgEmployeeRepository`] - Employees
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_employee_repository;
pub mod pg_service_repository;
pub mod pg_store_repository;
pub mod pg_token_repository;

pub use pg_employee_repository::PgEmployeeRepository;
pub use pg_service_repository::PgServiceRepository;
pub use pg_store_repository::PgStoreRepository;
pub use pg_token_repository::PgTokenRepository;

use sqlx::PgConnection;

use crate::domain::entities::StoreScope;
use crate::error::AppError;

/// Locks the scoped store row for the rest of the transaction.
///
/// Fails with [`AppError::StoreNotOwned`] when no store matches both the id
/// and the owner.
pub(crate) async fn lock_owned_store(
    conn: &mut PgConnection,
    scope: &StoreScope,
) -> Result<(), AppError> {
    let owned = sqlx::query_scalar!(
        "SELECT id FROM stores WHERE id = $1 AND user_id = $2 FOR SHARE",
        scope.store_id,
        scope.user_id
    )
    .fetch_optional(&mut *conn)
    .await?;

    owned.map(|_| ()).ok_or(AppError::StoreNotOwned)
}
