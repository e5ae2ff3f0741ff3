//! API route configuration.
//!
//! Reads are public; mutations resolve the caller through
//! [`crate::api::middleware::session::Session`].

use crate::api::handlers::{
    create_service_handler, delete_service_handler, get_service_handler, list_employees_handler,
    list_services_handler, update_service_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /{storeId}/services`              - List services of a store
/// - `POST   /{storeId}/services`              - Create a service (auth)
/// - `GET    /{storeId}/services/{serviceId}`  - Service with images and category
/// - `PATCH  /{storeId}/services/{serviceId}`  - Update a service (auth)
/// - `DELETE /{storeId}/services/{serviceId}`  - Delete a service (auth)
/// - `GET    /{storeId}/employees`             - List employees of a store
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{store_id}/services",
            get(list_services_handler).post(create_service_handler),
        )
        .route(
            "/{store_id}/services/{service_id}",
            get(get_service_handler)
                .patch(update_service_handler)
                .delete(delete_service_handler),
        )
        .route("/{store_id}/employees", get(list_employees_handler))
}
