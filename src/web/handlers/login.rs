//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::api::middleware::session::AUTH_COOKIE;

/// Template for the login page.
///
/// The form stores the pasted API token in the `auth_token` cookie and
/// navigates to the dashboard.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    cookie_name: &'static str,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_handler() -> impl IntoResponse {
    LoginTemplate {
        cookie_name: AUTH_COOKIE,
    }
}
