//! Repository trait for employees.

use crate::domain::entities::Employee;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Lists the employees of a store, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_store(&self, store_id: &str) -> Result<Vec<Employee>, AppError>;

    /// Finds one employee of a store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_in_store(
        &self,
        store_id: &str,
        employee_id: &str,
    ) -> Result<Option<Employee>, AppError>;
}
