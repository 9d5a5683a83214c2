use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

const MAX_CONNECTIONS: u32 = 5;

/// Opens the pool used for generation history and probes `content_generations`.
///
/// A missing table is logged, not fatal: generation keeps working and saves fail softly.
pub async fn connect_history_store(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .context("failed to connect to DATABASE_URL")?;

    match sqlx::query("SELECT 1 FROM content_generations LIMIT 1")
        .fetch_optional(&pool)
        .await
    {
        Ok(_) => info!("PostgreSQL pool ready (content_generations reachable)"),
        Err(e) => warn!("content_generations is not queryable, saves will fail: {e}"),
    }

    Ok(pool)
}
