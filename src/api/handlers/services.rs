//! Handlers for service endpoints.
//!
//! Reads are public. Mutations require an identity ([`Session`]) and check, in
//! order: identity (403), path ids (400), body fields (400), store ownership
//! (405). Unexpected failures are logged under an operation tag and answered
//! with a bare 500.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
};

use crate::api::dto::require_id;
use crate::api::dto::service::{ServiceListQuery, ServiceRequest};
use crate::api::middleware::session::Session;
use crate::domain::entities::{Service, ServiceDetails, StoreScope};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the non-archived services of a store.
///
/// # Endpoint
///
/// `GET /api/{storeId}/services?categoryId=..&isFeatured=true`
///
/// # Errors
///
/// Returns 400 Bad Request if the store id is blank.
pub async fn list_services_handler(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
    Query(query): Query<ServiceListQuery>,
) -> Result<Json<Vec<ServiceDetails>>, AppError> {
    let store_id = require_id(&store_id, "Store id is required")?;

    state
        .catalog_service
        .list_services(store_id, query.into())
        .await
        .map(Json)
        .map_err(|e| e.traced("SERVICES_GET"))
}

/// Creates a service in a store owned by the caller.
///
/// # Endpoint
///
/// `POST /api/{storeId}/services`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Haircut",
///   "price": 20,
///   "time": 30,
///   "categoryId": "c1",
///   "images": [{ "url": "https://cdn.example.com/haircut.png" }],
///   "isFeatured": false,
///   "isArchived": false
/// }
/// ```
///
/// # Errors
///
/// - 403 if the caller is unauthenticated
/// - 400 if the store id is blank or a required field is missing
/// - 405 if the caller does not own the store
pub async fn create_service_handler(
    State(state): State<AppState>,
    session: Session,
    Path(store_id): Path<String>,
    body: Bytes,
) -> Result<Json<ServiceDetails>, AppError> {
    let user_id = session.require_user()?;
    let store_id = require_id(&store_id, "Store id is required")?;
    let input = ServiceRequest::from_body(&body)?.into_input()?;

    let scope = StoreScope::new(store_id, user_id);

    state
        .catalog_service
        .create_service(&scope, input)
        .await
        .map(Json)
        .map_err(|e| e.traced("SERVICES_POST"))
}

/// Returns a service with its images and category.
///
/// # Endpoint
///
/// `GET /api/{storeId}/services/{serviceId}`
///
/// No authentication required. An unknown id answers `200` with a `null`
/// body.
///
/// # Errors
///
/// Returns 400 Bad Request if the service id is blank.
pub async fn get_service_handler(
    State(state): State<AppState>,
    Path((_store_id, service_id)): Path<(String, String)>,
) -> Result<Json<Option<ServiceDetails>>, AppError> {
    let service_id = require_id(&service_id, "Service id is required")?;

    state
        .catalog_service
        .get_service(service_id)
        .await
        .map(Json)
        .map_err(|e| e.traced("SERVICE_GET"))
}

/// Deletes a service and returns the deleted record.
///
/// # Endpoint
///
/// `DELETE /api/{storeId}/services/{serviceId}`
///
/// # Errors
///
/// - 403 if the caller is unauthenticated
/// - 400 if the service id is blank
/// - 405 if the caller does not own the store
/// - 404 if the service is not in the store
pub async fn delete_service_handler(
    State(state): State<AppState>,
    session: Session,
    Path((store_id, service_id)): Path<(String, String)>,
) -> Result<Json<Service>, AppError> {
    let user_id = session.require_user()?;
    let service_id = require_id(&service_id, "Service id is required")?;

    let scope = StoreScope::new(store_id, user_id);

    state
        .catalog_service
        .delete_service(&scope, service_id)
        .await
        .map(Json)
        .map_err(|e| e.traced("SERVICE_DELETE"))
}

/// Updates a service and replaces its images.
///
/// # Endpoint
///
/// `PATCH /api/{storeId}/services/{serviceId}`
///
/// Takes the same body as the create endpoint. The submitted image list
/// replaces the stored one. Omitted `isFeatured` / `isArchived` keep their
/// current value.
///
/// # Errors
///
/// - 403 if the caller is unauthenticated
/// - 400 if the service id is blank or a required field is missing
/// - 405 if the caller does not own the store
/// - 404 if the service is not in the store
pub async fn update_service_handler(
    State(state): State<AppState>,
    session: Session,
    Path((store_id, service_id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<ServiceDetails>, AppError> {
    let user_id = session.require_user()?;
    let service_id = require_id(&service_id, "Service id is required")?;
    let input = ServiceRequest::from_body(&body)?.into_input()?;

    let scope = StoreScope::new(store_id, user_id);

    state
        .catalog_service
        .update_service(&scope, service_id, input)
        .await
        .map(Json)
        .map_err(|e| e.traced("SERVICE_PATCH"))
}
