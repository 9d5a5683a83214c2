//! Request payloads for the generation API.

use serde::{Deserialize, Serialize};

use crate::generation::sanitize::sanitize;

/// One submission from the content form. Created per request, never mutated.
///
/// Missing strings deserialize as empty and missing flags as `false`, so the
/// validator decides what is required rather than serde.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub platform: String,
    pub content_type: String,
    pub content_length: String,
    pub objective: String,
    pub style: String,
    pub content_category: String,
    pub product_name: String,
    pub key_message: String,
    pub target_audience: String,
    pub keywords: String,
    #[serde(alias = "facebookPageLink")]
    pub business_page_link: String,
    #[serde(rename = "includeCTA")]
    pub include_cta: bool,
    pub include_emojis: bool,
    pub include_hashtags: bool,
    pub num_variations: i64,
    /// Optional caller-asserted identity; must match the verified user when both exist.
    pub user_id: Option<String>,
}

/// A validated request with every free-text field passed through `sanitize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizedRequest {
    pub platform: String,
    pub content_type: String,
    pub content_length: String,
    pub objective: String,
    pub style: String,
    pub content_category: String,
    pub product_name: String,
    pub key_message: String,
    pub target_audience: String,
    pub keywords: String,
    pub business_page_link: String,
    pub include_cta: bool,
    pub include_emojis: bool,
    pub include_hashtags: bool,
    /// Always in 1..=3 once validation has passed.
    pub num_variations: usize,
}

impl SanitizedRequest {
    /// Builds the sanitized view. Call only after `validate_request` succeeded.
    pub fn from_validated(request: &GenerationRequest) -> Self {
        Self {
            platform: request.platform.trim().to_string(),
            content_type: request.content_type.trim().to_string(),
            content_length: request.content_length.trim().to_string(),
            objective: request.objective.trim().to_string(),
            style: request.style.trim().to_string(),
            content_category: request.content_category.trim().to_string(),
            product_name: sanitize(&request.product_name),
            key_message: sanitize(&request.key_message),
            target_audience: sanitize(&request.target_audience),
            keywords: sanitize(&request.keywords),
            business_page_link: sanitize(&request.business_page_link),
            include_cta: request.include_cta,
            include_emojis: request.include_emojis,
            include_hashtags: request.include_hashtags,
            num_variations: request.num_variations.clamp(1, 3) as usize,
        }
    }
}
