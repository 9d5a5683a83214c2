pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/generations",
            get(handlers::handle_list_generations),
        )
        .route(
            "/api/v1/generations/export",
            post(handlers::handle_export),
        )
        .with_state(state)
}
