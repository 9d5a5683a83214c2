//! Content generation: orchestrates the full pipeline for one request.
//!
//! Flow: validate → sanitize → compose guidelines + assemble prompt →
//!       one model call (raced against the deadline) → parse N variations.
//!
//! Stateless: the only shared object is the injected `ContentModel`.

use tracing::info;

use crate::errors::AppError;
use crate::generation::assembler::assemble_prompt;
use crate::generation::parser::parse_variations;
use crate::generation::request::{GenerationRequest, SanitizedRequest};
use crate::generation::validation::validate_request;
use crate::llm_client::ContentModel;

/// The outcome of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub request: SanitizedRequest,
    /// Exactly `request.num_variations` entries.
    pub variations: Vec<String>,
}

/// Runs the generation pipeline. Either all N variations come back or the call fails.
pub async fn generate_content(
    model: &dyn ContentModel,
    request: &GenerationRequest,
) -> Result<GeneratedContent, AppError> {
    // Step 1: Validate raw input
    validate_request(request).map_err(AppError::Validation)?;

    // Step 2: Sanitize free text
    let sanitized = SanitizedRequest::from_validated(request);
    info!(
        "Generating {} variation(s) for platform={:?} type={:?}",
        sanitized.num_variations, sanitized.platform, sanitized.content_type
    );

    // Step 3: Build prompt
    let prompt = assemble_prompt(&sanitized);

    // Step 4: Model call
    let reply = model.generate(&prompt).await?;
    info!("Model replied with {} characters", reply.chars().count());

    // Step 5: Parse
    let variations = parse_variations(&reply, sanitized.num_variations);
    if variations.is_empty() {
        return Err(AppError::EmptyResult);
    }

    info!("Parsed {} variation(s)", variations.len());

    Ok(GeneratedContent {
        request: sanitized,
        variations,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::prompts::{VARIATION_END, VARIATION_START};
    use crate::llm_client::LlmError;

    /// Canned model: returns a fixed reply (or error) and records the prompt.
    pub(crate) struct FakeModel {
        reply: Mutex<Option<Result<String, LlmError>>>,
        pub(crate) last_prompt: Mutex<Option<String>>,
    }

    impl FakeModel {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Mutex::new(Some(Ok(text.to_string()))),
                last_prompt: Mutex::new(None),
            }
        }

        pub(crate) fn failing(err: LlmError) -> Self {
            Self {
                reply: Mutex::new(Some(Err(err))),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ContentModel for FakeModel {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(LlmError::MalformedResponse))
        }
    }

    pub(crate) fn two_block_reply() -> String {
        format!(
            "{VARIATION_START}\n  ပထမ ကြော်ငြာ စာသား  \n{VARIATION_END}\n\
             {VARIATION_START}\nဒုတိယ ကြော်ငြာ စာသား\n{VARIATION_END}"
        )
    }

    fn scenario_request() -> GenerationRequest {
        GenerationRequest {
            content_type: "Post".to_string(),
            content_length: "standard".to_string(),
            style: "friendly".to_string(),
            num_variations: 2,
            target_audience: "young adults".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_end_to_end_two_marked_blocks() {
        let model = FakeModel::replying(&two_block_reply());
        let generated = generate_content(&model, &scenario_request()).await.unwrap();

        assert_eq!(
            generated.variations,
            vec!["ပထမ ကြော်ငြာ စာသား", "ဒုတိယ ကြော်ငြာ စာသား"]
        );
    }

    #[tokio::test]
    async fn test_validation_failure_skips_model_call() {
        let model = FakeModel::replying(&two_block_reply());
        let request = GenerationRequest {
            style: String::new(),
            ..scenario_request()
        };

        let err = generate_content(&model, &request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Style is required"));
        assert!(model.last_prompt.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_prompt_sent_to_model_uses_sanitized_text() {
        let model = FakeModel::replying(&two_block_reply());
        let request = GenerationRequest {
            product_name: "<i>Golden</i> Tea<script>evil()</script>".to_string(),
            ..scenario_request()
        };

        generate_content(&model, &request).await.unwrap();
        let prompt = model.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Product/Service Name: Golden Tea"));
        assert!(!prompt.contains("evil()"));
    }

    #[tokio::test]
    async fn test_empty_reply_is_a_failure() {
        let model = FakeModel::replying("   ");
        let err = generate_content(&model, &scenario_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyResult));
    }

    #[tokio::test]
    async fn test_blank_marked_blocks_are_a_failure() {
        let model = FakeModel::replying(&format!("{VARIATION_START}   {VARIATION_END}"));
        let err = generate_content(&model, &scenario_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyResult));
    }

    #[tokio::test]
    async fn test_model_timeout_surfaces_as_upstream_timeout() {
        let model = FakeModel::failing(LlmError::Timeout { seconds: 12 });
        let err = generate_content(&model, &scenario_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UpstreamTimeout { seconds: 12 }));
    }

    #[tokio::test]
    async fn test_model_http_error_keeps_status() {
        let model = FakeModel::failing(LlmError::Api {
            status: 429,
            message: "quota".to_string(),
        });
        let err = generate_content(&model, &scenario_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream { status: 429, .. }));
    }
}
