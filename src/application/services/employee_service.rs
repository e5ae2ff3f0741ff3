//! Employee listing and lookup.

use std::sync::Arc;

use crate::domain::entities::Employee;
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Lists the employees of a store, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_employees(&self, store_id: &str) -> Result<Vec<Employee>, AppError> {
        self.repository.list_by_store(store_id).await
    }

    /// Looks up one employee of a store. `None` when the store has no such
    /// employee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_employee(
        &self,
        store_id: &str,
        employee_id: &str,
    ) -> Result<Option<Employee>, AppError> {
        self.repository.find_in_store(store_id, employee_id).await
    }
}
