//! Authentication service resolving API tokens to users.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::repositories::{ApiToken, TokenRepository};
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Service answering "who is the caller" for bearer and cookie tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge tokens without the server-side secret.
pub struct AuthService {
    repository: Arc<dyn TokenRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token repository for DB operations
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<dyn TokenRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        hash_with_secret(&self.signing_secret, token)
    }

    /// Resolves a raw token to the id of the user it belongs to.
    ///
    /// Unknown and revoked tokens resolve to `None`. On success the token's
    /// `last_used_at` timestamp is refreshed on a best-effort basis.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve_user(&self, token: &str) -> Result<Option<String>, AppError> {
        let token_hash = self.hash_token(token);

        let user_id = self.repository.find_user_id(&token_hash).await?;

        if user_id.is_some()
            && let Err(e) = self.repository.update_last_used(&token_hash).await
        {
            tracing::warn!(error = %e, "Failed to update token last_used_at");
        }

        Ok(user_id)
    }

    /// Stores the hash of `raw_token` as a new token for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the user id or name is blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register_token(
        &self,
        user_id: &str,
        name: &str,
        raw_token: &str,
    ) -> Result<ApiToken, AppError> {
        if user_id.trim().is_empty() {
            return Err(AppError::bad_request("User id is required"));
        }
        if name.trim().is_empty() {
            return Err(AppError::bad_request("Name is required"));
        }

        self.repository
            .create_token(user_id, name.trim(), &self.hash_token(raw_token))
            .await
    }
}

fn hash_with_secret(secret: &str, token: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
