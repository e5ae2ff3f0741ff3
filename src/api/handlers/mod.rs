//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod employees;
pub mod health;
pub mod services;

pub use employees::list_employees_handler;
pub use health::health_handler;
pub use services::{
    create_service_handler, delete_service_handler, get_service_handler, list_services_handler,
    update_service_handler,
};
