//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, extract::State, response::IntoResponse};

use crate::domain::entities::Store;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::web_auth::DashboardUser;
use crate::web::views::path_of;

/// Template for the dashboard home page: the stores of the signed-in user.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub stores: Vec<StoreRow>,
}

pub struct StoreRow {
    pub name: String,
    pub created_at: String,
    pub employees_href: String,
}

impl From<Store> for StoreRow {
    fn from(store: Store) -> Self {
        StoreRow {
            employees_href: path_of(&[store.id.as_str(), "employees"]),
            created_at: store.created_at.format("%B %-d, %Y").to_string(),
            name: store.name,
        }
    }
}

/// Renders the list of stores owned by the signed-in user.
///
/// # Endpoint
///
/// `GET /`
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(DashboardUser(user_id)): Extension<DashboardUser>,
) -> Result<impl IntoResponse, AppError> {
    let stores = state
        .store_service
        .list_for_user(&user_id)
        .await
        .map_err(|e| e.traced("DASHBOARD_GET"))?;

    Ok(DashboardTemplate {
        stores: stores.into_iter().map(StoreRow::from).collect(),
    })
}
