//! Axum route handlers for the Generation API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::auth::{check_claimed_user, resolve_user};
use crate::errors::AppError;
use crate::generation::export::{render_export, EXPORT_FILENAME};
use crate::generation::generator::generate_content;
use crate::generation::history::{clamp_limit, list_generations, save_generation};
use crate::generation::request::GenerationRequest;
use crate::models::generation::ContentGenerationRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub variations: Vec<String>,
    pub user_id: Option<Uuid>,
    /// Present only when the generation was persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub variations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate
///
/// Validates, prompts the model once and returns exactly `numVariations` texts.
/// Persists the result when a database is configured and the caller is signed in.
pub async fn handle_generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let user = resolve_user(
        state.identity.as_deref(),
        state.config.require_auth,
        &headers,
    )
    .await?;

    let Json(request) = payload.map_err(invalid_body)?;

    check_claimed_user(user.as_ref(), request.user_id.as_deref())?;

    let generated = generate_content(state.model.as_ref(), &request).await?;

    let generation_id = match (&state.db, &user) {
        (Some(pool), Some(user)) => {
            match save_generation(pool, user.id, &generated.request, &generated.variations).await
            {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!("Failed to persist generation for user {}: {e}", user.id);
                    None
                }
            }
        }
        _ => None,
    };

    Ok(Json(GenerateResponse {
        success: true,
        variations: generated.variations,
        user_id: user.map(|u| u.id),
        generation_id,
    }))
}

/// GET /api/v1/generations?limit=N
///
/// Lists the signed-in caller's saved generations, newest first.
pub async fn handle_list_generations(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<ContentGenerationRow>>, AppError> {
    let Query(query) = query
        .map_err(|e| AppError::Validation(format!("Invalid query string: {}", e.body_text())))?;

    let pool = state
        .db
        .as_ref()
        .ok_or_else(|| AppError::Unavailable("Generation history is not configured".to_string()))?;

    let user = resolve_user(state.identity.as_deref(), true, &headers)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Authorization header required".to_string()))?;

    let rows = list_generations(pool, user.id, clamp_limit(query.limit)).await?;
    Ok(Json(rows))
}

/// POST /api/v1/generations/export
///
/// Returns the variations as a downloadable UTF-8 text file.
pub async fn handle_export(
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;

    if request.variations.iter().all(|v| v.trim().is_empty()) {
        return Err(AppError::Validation("No content to export".to_string()));
    }

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/plain; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILENAME}\""),
        ),
    ];

    Ok((headers, render_export(&request.variations)))
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
}
