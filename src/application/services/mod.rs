//! Business logic services for the application layer.

pub mod auth_service;
pub mod catalog_service;
pub mod employee_service;
pub mod store_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use employee_service::EmployeeService;
pub use store_service::StoreService;
