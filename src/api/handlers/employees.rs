//! Handlers for employee endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::require_id;
use crate::domain::entities::Employee;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the employees of a store, newest first.
///
/// # Endpoint
///
/// `GET /api/{storeId}/employees`
///
/// No authentication required.
///
/// # Errors
///
/// Returns 400 Bad Request if the store id is blank.
pub async fn list_employees_handler(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let store_id = require_id(&store_id, "Store id is required")?;

    state
        .employee_service
        .list_employees(store_id)
        .await
        .map(Json)
        .map_err(|e| e.traced("EMPLOYEES_GET"))
}
