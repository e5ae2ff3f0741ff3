//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for the HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Services of a store and their images
//! - [`services::employee_service::EmployeeService`] - Employee listing
//! - [`services::store_service::StoreService`] - Stores and ownership checks
//! - [`services::auth_service::AuthService`] - Token hashing and caller resolution

pub mod services;
