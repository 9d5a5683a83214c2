use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of `content_generations`: a finished generation with the
/// parameters that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentGenerationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub platform: Option<String>,
    pub content_type: String,
    pub length: String,
    pub objective: Option<String>,
    pub tone: String,
    pub content_category: String,
    pub product_name: Option<String>,
    pub key_message: Option<String>,
    pub target_audience: Option<String>,
    pub keywords: Option<String>,
    pub business_page: Option<String>,
    pub include_cta: bool,
    pub include_emojis: bool,
    pub include_hashtags: bool,
    pub variations_count: i32,
    pub generated_content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
