//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    dashboard_handler, employee_handler, employees_handler, login_handler, new_employee_handler,
};
use axum::{Router, routing::get};

/// Dashboard routes requiring a signed-in user.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /` - Stores of the signed-in user
/// - `GET /{storeId}/employees` - Employees table of a store
/// - `GET /{storeId}/employees/new` - New employee page
/// - `GET /{storeId}/employees/{employeeId}` - Single employee page
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/{store_id}/employees", get(employees_handler))
        .route("/{store_id}/employees/new", get(new_employee_handler))
        .route(
            "/{store_id}/employees/{employee_id}",
            get(employee_handler),
        )
}

/// Public dashboard routes without authentication.
///
/// # Endpoints
///
/// - `GET /login` - Login page
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_handler))
}
