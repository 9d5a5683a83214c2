mod auth;
mod config;
mod db;
mod errors;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderName, Method,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::{IdentityVerifier, SupabaseAuth};
use crate::config::Config;
use crate::db::connect_history_store;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting copywriter API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (optional)
    let db = match &config.database_url {
        Some(url) => Some(connect_history_store(url).await?),
        None => {
            warn!("DATABASE_URL not set; generations will not be persisted");
            None
        }
    };

    // Initialize identity verification (optional)
    let identity: Option<Arc<dyn IdentityVerifier>> = match &config.supabase {
        Some(supabase) => {
            info!("Supabase auth enabled (required: {})", config.require_auth);
            let verifier: Arc<dyn IdentityVerifier> = Arc::new(SupabaseAuth::new(supabase)?);
            Some(verifier)
        }
        None => {
            warn!("Supabase not configured; all requests are anonymous");
            None
        }
    };

    // Initialize model client
    let model = GeminiClient::new(config.gemini_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        db,
        model: Arc::new(model),
        identity,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Any origin, with the headers the browser client sends alongside its session token.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}
