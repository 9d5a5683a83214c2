//! Identity verification against Supabase Auth.
//!
//! The access token from `Authorization: Bearer <jwt>` is checked by asking
//! Supabase who it belongs to (`GET /auth/v1/user`). No local JWT decoding.

use async_trait::async_trait;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::SupabaseConfig;
use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token rejected (status {0})")]
    Rejected(u16),
}

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Resolves an access token to a user. `AppState` carries an `Arc<dyn IdentityVerifier>`.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, access_token: &str) -> Result<AuthUser, AuthError>;
}

#[derive(Clone)]
pub struct SupabaseAuth {
    client: Client,
    user_endpoint: String,
    anon_key: String,
}

impl SupabaseAuth {
    pub fn new(config: &SupabaseConfig) -> Result<Self, AuthError> {
        Ok(Self {
            client: Client::builder().build()?,
            user_endpoint: format!("{}/auth/v1/user", config.url),
            anon_key: config.anon_key.clone(),
        })
    }
}

#[async_trait]
impl IdentityVerifier for SupabaseAuth {
    async fn verify(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let response = self
            .client
            .get(&self.user_endpoint)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Supabase rejected access token: {}", status);
            return Err(AuthError::Rejected(status.as_u16()));
        }

        Ok(response.json::<AuthUser>().await?)
    }
}

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Determines the caller for one request.
///
/// - no verifier configured → anonymous
/// - no token → anonymous, or 401 when `require_auth`
/// - token present → must verify, otherwise 401
pub async fn resolve_user(
    verifier: Option<&dyn IdentityVerifier>,
    require_auth: bool,
    headers: &HeaderMap,
) -> Result<Option<AuthUser>, AppError> {
    let Some(verifier) = verifier else {
        return Ok(None);
    };

    let Some(token) = bearer_token(headers) else {
        if require_auth {
            return Err(AppError::Unauthorized(
                "Authorization header required".to_string(),
            ));
        }
        return Ok(None);
    };

    match verifier.verify(token).await {
        Ok(user) => {
            debug!("Authenticated user {} ({:?})", user.id, user.email);
            Ok(Some(user))
        }
        Err(e) => {
            warn!("Authentication failed: {e}");
            Err(AppError::Unauthorized("Authentication failed".to_string()))
        }
    }
}

/// Rejects a body-supplied user id that differs from the verified one.
pub fn check_claimed_user(user: Option<&AuthUser>, claimed: Option<&str>) -> Result<(), AppError> {
    match (user, claimed) {
        (Some(user), Some(claimed)) if !claimed.is_empty() && claimed != user.id.to_string() => {
            Err(AppError::Unauthorized("User ID mismatch".to_string()))
        }
        _ => Ok(()),
    }
}
