//! PostgreSQL implementation of employee repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Employee;
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

/// PostgreSQL repository for employees.
pub struct PgEmployeeRepository {
    pool: Arc<PgPool>,
}

impl PgEmployeeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn list_by_store(&self, store_id: &str) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as!(
            Employee,
            r#"
            SELECT id, store_id, name, created_at, updated_at
            FROM employees
            WHERE store_id = $1
            ORDER BY created_at DESC
            "#,
            store_id
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(employees)
    }

    async fn find_in_store(
        &self,
        store_id: &str,
        employee_id: &str,
    ) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as!(
            Employee,
            r#"
            SELECT id, store_id, name, created_at, updated_at
            FROM employees
            WHERE store_id = $1 AND id = $2
            "#,
            store_id,
            employee_id
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(employee)
    }
}
