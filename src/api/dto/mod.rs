//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON (de)serialization with camelCase keys.

pub mod health;
pub mod service;

use crate::error::AppError;

/// Rejects a blank path identifier with a field-specific message.
///
/// # Errors
///
/// Returns [`AppError::Validation`] carrying `message` if `id` is empty or
/// whitespace.
pub fn require_id<'a>(id: &'a str, message: &str) -> Result<&'a str, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::bad_request(message));
    }
    Ok(id)
}
