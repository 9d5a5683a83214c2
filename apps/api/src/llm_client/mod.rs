/// LLM Client: the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions go through `ContentModel`, implemented here by `GeminiClient`.
///
/// Model, endpoint, timeout and sampling parameters are hardcoded constants.
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all generation calls.
pub const MODEL: &str = "gemini-2.0-flash-exp";
/// Wall-clock deadline for a single model call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

const TEMPERATURE: f32 = 0.8;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model call timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Model reply has no candidate text")]
    MalformedResponse,
}

/// A text-generation backend. `AppState` carries an `Arc<dyn ContentModel>`
/// so handlers never depend on the concrete HTTP client.
#[async_trait]
pub trait ContentModel: Send + Sync {
    /// Sends one prompt and returns the raw text of the first candidate.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

/// Top-level `generateContent` response envelope. Every level is optional
/// so a partial reply surfaces as `MalformedResponse`, not a serde error.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Gemini `generateContent` client. The API key is injected at construction.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Self::with_api_base(api_key, GEMINI_API_BASE)
    }

    /// Same client pointed at another `models` base URL.
    pub(crate) fn with_api_base(api_key: String, api_base: &str) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{MODEL}:generateContent", self.api_base)
    }

    /// Makes one raw call, without the deadline.
    async fn call(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}: {}", status, body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed.text().ok_or(LlmError::MalformedResponse)?;

        debug!("Gemini call succeeded: {} bytes of text", text.len());
        Ok(text.to_string())
    }
}

#[async_trait]
impl ContentModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        with_deadline(REQUEST_TIMEOUT, self.call(prompt)).await
    }
}

/// Races `call` against `deadline`. Whichever settles first decides the outcome;
/// an error from the call itself is passed through untouched.
pub async fn with_deadline<T, F>(deadline: Duration, call: F) -> Result<T, LlmError>
where
    F: Future<Output = Result<T, LlmError>>,
{
    match tokio::time::timeout(deadline, call).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Model call exceeded {}s deadline", deadline.as_secs());
            Err(LlmError::Timeout {
                seconds: deadline.as_secs(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, Router};

    use super::*;

    #[test]
    fn test_request_body_uses_gemini_field_names() {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hello" }],
            }],
            generation_config: GenerationConfig::default(),
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["topK"], 40);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 2048);
        assert!(value["generationConfig"]["topP"].is_number());
    }

    #[test]
    fn test_response_text_extracts_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text(), Some("first"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text(), None);
    }

    #[test]
    fn test_response_candidate_without_content_has_no_text() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text(), None);
    }

    #[test]
    fn test_endpoint_targets_configured_model() {
        let client = GeminiClient::new("key".to_string()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
    }

    /// Serves `reply` for every request on a local port and returns a client aimed at it.
    async fn client_against(status: StatusCode, reply: &'static str) -> GeminiClient {
        let app = Router::new().fallback(move || async move { (status, reply) });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        GeminiClient::with_api_base("test-key".to_string(), &format!("http://{addr}/")).unwrap()
    }

    #[tokio::test]
    async fn test_non_success_status_keeps_body() {
        let client = client_against(StatusCode::SERVICE_UNAVAILABLE, "overloaded").await;

        match client.generate("prompt").await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "overloaded");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_envelope_without_candidates_is_malformed() {
        let client = client_against(StatusCode::OK, "{}").await;
        let result = client.generate("prompt").await;
        assert!(matches!(result, Err(LlmError::MalformedResponse)));
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_parse_error() {
        let client = client_against(StatusCode::OK, "<html>gateway</html>").await;
        let result = client.generate("prompt").await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[tokio::test]
    async fn test_first_candidate_text_is_returned() {
        let client = client_against(
            StatusCode::OK,
            r#"{"candidates": [{"content": {"parts": [{"text": "မင်္ဂလာပါ"}]}}]}"#,
        )
        .await;
        assert_eq!(client.generate("prompt").await.unwrap(), "မင်္ဂလာပါ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_elapses_before_pending_call() {
        let result: Result<String, LlmError> =
            with_deadline(REQUEST_TIMEOUT, std::future::pending()).await;

        assert!(matches!(result, Err(LlmError::Timeout { seconds: 12 })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_error_is_not_reported_as_timeout() {
        let result: Result<String, LlmError> = with_deadline(REQUEST_TIMEOUT, async {
            Err(LlmError::Api {
                status: 500,
                message: "boom".to_string(),
            })
        })
        .await;

        match result {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_finishing_before_deadline_wins() {
        let result = with_deadline(REQUEST_TIMEOUT, async {
            tokio::time::sleep(Duration::from_secs(11)).await;
            Ok::<_, LlmError>("done".to_string())
        })
        .await;

        assert_eq!(result.unwrap(), "done");
    }
}
