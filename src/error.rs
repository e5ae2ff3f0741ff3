//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. Errors are rendered as a plain
//! text body with a status code; there is no machine-readable error code.
//!
//! | Variant            | Status | Body                  |
//! |--------------------|--------|-----------------------|
//! | `Validation`       | 400    | field-specific message |
//! | `Unauthenticated`  | 403    | `Unauthenticated`     |
//! | `NotFound`         | 404    | message               |
//! | `StoreNotOwned`    | 405    | `Unauthorized`        |
//! | `Internal`         | 500    | `Internal error`      |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or invalid input.
    #[error("{0}")]
    Validation(String),

    /// The caller has no identity.
    #[error("Unauthenticated")]
    Unauthenticated,

    /// The store does not exist or belongs to another user.
    #[error("Unauthorized")]
    StoreNotOwned,

    #[error("{0}")]
    NotFound(String),

    /// Anything else. The message is logged, never sent to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreNotOwned => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs internal errors under an operation tag such as `SERVICE_PATCH`.
    ///
    /// Client errors pass through silently.
    pub fn traced(self, operation: &'static str) -> Self {
        if let AppError::Internal(ref reason) = self {
            tracing::error!(operation, reason = %reason, "[{operation}]");
        }
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Internal(_) => "Internal error".to_string(),
            other => other.to_string(),
        };

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(format!("Database error: {e}"))
    }
}
