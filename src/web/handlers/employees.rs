//! Employees table and single employee page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::web_auth::DashboardUser;
use crate::web::views::{EmployeesTable, TableQuery, path_of};

/// Template for the employees page.
///
/// Renders `templates/employees.html`: heading with count, action button,
/// search box and the sortable table.
#[derive(Template, WebTemplate)]
#[template(path = "employees.html")]
pub struct EmployeesTemplate {
    pub store_name: String,
    pub table: EmployeesTable,
}

/// Renders the employees table of a store owned by the signed-in user.
///
/// # Endpoint
///
/// `GET /{storeId}/employees?search=..&sort=name|createdAt&dir=asc|desc&selected=..`
///
/// A store the user does not own redirects to `/`.
pub async fn employees_handler(
    State(state): State<AppState>,
    Extension(DashboardUser(user_id)): Extension<DashboardUser>,
    Path(store_id): Path<String>,
    Query(query): Query<TableQuery>,
) -> Result<Response, AppError> {
    let store = match state.store_service.get_owned(&store_id, &user_id).await {
        Ok(store) => store,
        Err(AppError::StoreNotOwned) => return Ok(Redirect::to("/").into_response()),
        Err(e) => return Err(e.traced("EMPLOYEES_PAGE")),
    };

    let employees = state
        .employee_service
        .list_employees(&store.id)
        .await
        .map_err(|e| e.traced("EMPLOYEES_PAGE"))?;

    let table = EmployeesTable::build(&store.id, &employees, &query);

    tracing::debug!(
        store_id = %store.id,
        selected = ?table.selected,
        "Rendering employees table"
    );

    Ok(EmployeesTemplate {
        store_name: store.name,
        table,
    }
    .into_response())
}

/// Template for a single employee page: the "New Employee" and
/// "Edit {name}" targets of the table's action button.
#[derive(Template, WebTemplate)]
#[template(path = "employee.html")]
pub struct EmployeeTemplate {
    pub store_name: String,
    pub title: String,
    pub description: &'static str,
    /// Name and display date of an existing employee.
    pub employee: Option<(String, String)>,
    pub back_href: String,
}

/// Renders the page for a new employee of a store.
///
/// # Endpoint
///
/// `GET /{storeId}/employees/new`
pub async fn new_employee_handler(
    State(state): State<AppState>,
    Extension(DashboardUser(user_id)): Extension<DashboardUser>,
    Path(store_id): Path<String>,
) -> Result<Response, AppError> {
    let store = match state.store_service.get_owned(&store_id, &user_id).await {
        Ok(store) => store,
        Err(AppError::StoreNotOwned) => return Ok(Redirect::to("/").into_response()),
        Err(e) => return Err(e.traced("EMPLOYEE_NEW_PAGE")),
    };

    Ok(EmployeeTemplate {
        title: "Create employee".to_string(),
        description: "Add a new employee",
        employee: None,
        back_href: path_of(&[store.id.as_str(), "employees"]),
        store_name: store.name,
    }
    .into_response())
}

/// Renders one employee of a store owned by the signed-in user.
///
/// # Endpoint
///
/// `GET /{storeId}/employees/{employeeId}`
///
/// An employee the store does not have redirects back to the table.
pub async fn employee_handler(
    State(state): State<AppState>,
    Extension(DashboardUser(user_id)): Extension<DashboardUser>,
    Path((store_id, employee_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let store = match state.store_service.get_owned(&store_id, &user_id).await {
        Ok(store) => store,
        Err(AppError::StoreNotOwned) => return Ok(Redirect::to("/").into_response()),
        Err(e) => return Err(e.traced("EMPLOYEE_PAGE")),
    };

    let back_href = path_of(&[store.id.as_str(), "employees"]);

    let employee = state
        .employee_service
        .get_employee(&store.id, &employee_id)
        .await
        .map_err(|e| e.traced("EMPLOYEE_PAGE"))?;

    let Some(employee) = employee else {
        return Ok(Redirect::to(&back_href).into_response());
    };

    Ok(EmployeeTemplate {
        title: format!("Edit {}", employee.name),
        description: "Edit an employee",
        employee: Some((
            employee.name,
            employee.created_at.format("%B %-d, %Y").to_string(),
        )),
        back_href,
        store_name: store.name,
    }
    .into_response())
}
