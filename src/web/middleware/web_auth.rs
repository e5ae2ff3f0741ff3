//! Cookie-based authentication middleware for web dashboard.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::api::middleware::session::cookie_token;
use crate::state::AppState;

/// User id of the signed-in dashboard user, inserted as a request extension.
#[derive(Debug, Clone)]
pub struct DashboardUser(pub String);

/// Authenticates dashboard requests using the `auth_token` cookie.
///
/// # Authentication Flow
///
/// 1. Extract `auth_token` cookie from request
/// 2. Resolve it to a user via [`crate::application::services::AuthService`]
/// 3. On success, insert [`DashboardUser`] and continue to handler
/// 4. On failure or missing token, redirect to `/login`
///
/// Unlike the API, which answers `403`, the dashboard redirects so that a
/// browser lands on the login form.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/", get(dashboard_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let Some(token) = cookie_token(req.headers()) else {
        return Err(Redirect::to("/login"));
    };

    match st.auth_service.resolve_user(&token).await {
        Ok(Some(user_id)) => {
            req.extensions_mut().insert(DashboardUser(user_id));
            Ok(next.run(req).await)
        }
        Ok(None) => Err(Redirect::to("/login")),
        Err(e) => {
            tracing::error!(error = %e, "Dashboard session lookup failed");
            Err(Redirect::to("/login"))
        }
    }
}
