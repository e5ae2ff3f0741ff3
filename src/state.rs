//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, CatalogService, EmployeeService, StoreService};

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub employee_service: Arc<EmployeeService>,
    pub store_service: Arc<StoreService>,
    pub auth_service: Arc<AuthService>,
}
