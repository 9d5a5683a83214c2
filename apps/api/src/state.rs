use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::IdentityVerifier;
use crate::config::Config;
use crate::llm_client::ContentModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `DATABASE_URL` is unset; generations are then not persisted.
    pub db: Option<PgPool>,
    /// Pluggable model backend. Default: `GeminiClient`.
    pub model: Arc<dyn ContentModel>,
    /// `None` when Supabase is not configured; every caller is anonymous.
    pub identity: Option<Arc<dyn IdentityVerifier>>,
    pub config: Config,
}
