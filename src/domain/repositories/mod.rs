//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; PostgreSQL implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`StoreRepository`] - Stores and the ownership lookup
//! - [`ServiceRepository`] - Services with their images and category
//! - [`EmployeeRepository`] - Employees of a store
//! - [`TokenRepository`] - API tokens resolving callers to users

pub mod employee_repository;
pub mod service_repository;
pub mod store_repository;
pub mod token_repository;

pub use employee_repository::EmployeeRepository;
pub use service_repository::ServiceRepository;
pub use store_repository::StoreRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use service_repository::MockServiceRepository;
#[cfg(test)]
pub use store_repository::MockStoreRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
