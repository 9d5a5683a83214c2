//! Persistence of finished generations in `content_generations`.
//!
//! The table is owned by the hosted database; this module only inserts and reads.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::generation::export::render_export;
use crate::generation::request::SanitizedRequest;
use crate::models::generation::ContentGenerationRow;

pub const DEFAULT_HISTORY_LIMIT: i64 = 20;
pub const MAX_HISTORY_LIMIT: i64 = 100;

/// Inserts one generation and returns its id.
/// Empty optional fields are stored as NULL.
pub async fn save_generation(
    pool: &PgPool,
    user_id: Uuid,
    request: &SanitizedRequest,
    variations: &[String],
) -> Result<Uuid, sqlx::Error> {
    let id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO content_generations
            (user_id, platform, content_type, length, objective, tone, content_category,
             product_name, key_message, target_audience, keywords, business_page,
             include_cta, include_emojis, include_hashtags, variations_count, generated_content)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(non_empty(&request.platform))
    .bind(&request.content_type)
    .bind(&request.content_length)
    .bind(non_empty(&request.objective))
    .bind(&request.style)
    .bind(&request.content_category)
    .bind(non_empty(&request.product_name))
    .bind(non_empty(&request.key_message))
    .bind(non_empty(&request.target_audience))
    .bind(non_empty(&request.keywords))
    .bind(non_empty(&request.business_page_link))
    .bind(request.include_cta)
    .bind(request.include_emojis)
    .bind(request.include_hashtags)
    .bind(variations.len() as i32)
    .bind(render_export(variations))
    .fetch_one(pool)
    .await?;

    info!("Saved generation {id} for user {user_id}");
    Ok(id)
}

/// Most recent generations for `user_id`, newest first. `limit` should come from `clamp_limit`.
pub async fn list_generations(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<ContentGenerationRow>, sqlx::Error> {
    sqlx::query_as::<_, ContentGenerationRow>(
        "SELECT * FROM content_generations WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Applies the default and the upper bound to a caller-supplied page size.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
