//! Caller identity extractor.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::COOKIE, request::Parts},
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Name of the cookie holding the dashboard token.
pub const AUTH_COOKIE: &str = "auth_token";

/// The identity of the caller, if any.
///
/// Extraction never fails for a missing or unknown token; it yields a
/// session without a user instead, and each handler decides whether that is
/// acceptable. Only database failures reject the request.
///
/// # Token Sources
///
/// 1. `Authorization: Bearer <token>` header
/// 2. `auth_token` cookie (set by the dashboard login page)
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(session: Session) -> Result<String, AppError> {
///     let user_id = session.require_user()?;
///     Ok(format!("hello {user_id}"))
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user_id: Option<String>,
}

impl Session {
    /// Returns the caller's user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthenticated`] if the caller has no identity.
    pub fn require_user(&self) -> Result<&str, AppError> {
        self.user_id.as_deref().ok_or(AppError::Unauthenticated)
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match AuthBearer::from_request_parts(parts, &()).await {
            Ok(AuthBearer(token)) => Some(token),
            Err(_) => cookie_token(&parts.headers),
        };

        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Ok(Session::default());
        };

        let user_id = state
            .auth_service
            .resolve_user(&token)
            .await
            .map_err(|e| e.traced("SESSION"))?;

        Ok(Session { user_id })
    }
}

/// Extracts the `auth_token` cookie value.
///
/// Handles multiple cookies in the `Cookie` header by splitting on
/// semicolons and ignoring every other cookie.
pub fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == AUTH_COOKIE).then(|| value.to_string())
        })
}
