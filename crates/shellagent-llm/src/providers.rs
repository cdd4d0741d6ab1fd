//! LLM Provider implementations

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Trait for LLM providers
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Get the provider kind
    fn kind(&self) -> ProviderKind;

    /// Check if the provider is available
    async fn is_available(&self) -> bool;

    /// Complete a conversation
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}

// ============================================================================
// Gemini Provider
// ============================================================================

pub const GEMINI_DEFAULT_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Configuration for Gemini provider
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    /// Read `GEMINI_API_KEY`, `SHELLAGENT_GEMINI_MODEL` and
    /// `SHELLAGENT_GEMINI_URL`. A missing key yields an empty one; requests
    /// then fail with a configuration error.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: std::env::var("SHELLAGENT_GEMINI_MODEL")
                .unwrap_or_else(|_| GEMINI_DEFAULT_MODEL.to_string()),
            base_url: std::env::var("SHELLAGENT_GEMINI_URL")
                .unwrap_or_else(|_| GEMINI_DEFAULT_URL.to_string()),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

/// Google Gemini API provider
pub struct GeminiProvider {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiRequest {
    pub(crate) contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) role: Option<String>,
    #[serde(default)]
    pub(crate) parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiPart {
    #[serde(default)]
    pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    pub(crate) usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiCandidate {
    #[serde(default)]
    pub(crate) content: Option<GeminiContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiUsage {
    #[serde(default)]
    pub(crate) prompt_token_count: u32,
    #[serde(default)]
    pub(crate) candidates_token_count: u32,
    #[serde(default)]
    pub(crate) total_token_count: u32,
}

/// The prompt as a single user turn.
pub(crate) fn gemini_request(request: &CompletionRequest) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart {
                text: request.prompt.clone(),
            }],
        }],
    }
}

/// Concatenate the text parts of the first candidate.
pub(crate) fn gemini_completion(response: GeminiResponse, model: &str) -> CompletionResponse {
    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let usage = response.usage_metadata.unwrap_or_default();

    CompletionResponse {
        content,
        usage: TokenUsage {
            prompt_tokens: usage.prompt_token_count,
            completion_tokens: usage.candidates_token_count,
            total_tokens: usage.total_token_count,
        },
        model: Some(model.to_string()),
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn is_available(&self) -> bool {
        // Just check if we have an API key
        !self.config.api_key.is_empty()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        if self.config.api_key.is_empty() {
            return Err(LLMError::MissingApiKey { provider: "Gemini" });
        }

        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.config.model.clone());
        let body = gemini_request(&request);

        tracing::debug!(%model, "sending generateContent request");
        let response = self
            .client
            .post(self.config.endpoint(&model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::Transport {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LLMError::Status { status, body });
        }

        let gemini_response: GeminiResponse =
            response.json().await.map_err(|e| LLMError::Decode {
                message: e.to_string(),
            })?;

        Ok(gemini_completion(gemini_response, &model))
    }
}

// ============================================================================
// Deterministic Provider (Fallback)
// ============================================================================

/// Offline provider that always answers with the same line
pub struct DeterministicProvider {
    reply: String,
}

impl DeterministicProvider {
    pub fn new() -> Self {
        Self::with_reply("Sideways again. Shell closed, claws ready, watching the pools.")
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for DeterministicProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMProvider for DeterministicProvider {
    fn name(&self) -> &'static str {
        "Deterministic"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Deterministic
    }

    async fn is_available(&self) -> bool {
        true // Always available
    }

    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse> {
        Ok(CompletionResponse {
            content: self.reply.clone(),
            usage: TokenUsage::default(),
            model: Some("deterministic".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_config() -> GeminiConfig {
        GeminiConfig {
            api_key: String::new(),
            model: GEMINI_DEFAULT_MODEL.to_string(),
            base_url: GEMINI_DEFAULT_URL.to_string(),
        }
    }

    #[test]
    fn prompt_becomes_one_user_turn() {
        let request = CompletionRequest::new("idle market").with_model(Some("gemini-x".into()));
        let json = serde_json::to_value(gemini_request(&request)).unwrap();
        assert_eq!(json["contents"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "idle market");
        // the model goes in the URL, not the body
        assert!(json.get("model").is_none());
    }

    #[test]
    fn response_text_and_usage_are_extracted() {
        let raw = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Pools "}, {"text": "are thin."}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4, "totalTokenCount": 16}
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(raw).unwrap();
        let completion = gemini_completion(parsed, "gemini-test");
        assert_eq!(completion.content, "Pools are thin.");
        assert_eq!(completion.usage.total_tokens, 16);
        assert_eq!(completion.model.as_deref(), Some("gemini-test"));
    }

    #[test]
    fn empty_candidates_give_empty_text() {
        let parsed: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(gemini_completion(parsed, "m").content, "");
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let mut config = offline_config();
        config.base_url = "http://localhost:8089/".to_string();
        assert_eq!(
            config.endpoint("gemini-x"),
            "http://localhost:8089/v1beta/models/gemini-x:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_is_configuration_error() {
        let provider = GeminiProvider::new(offline_config());
        assert!(!provider.is_available().await);
        let result = provider
            .complete(CompletionRequest::new("hi"))
            .await;
        assert!(matches!(result, Err(LLMError::MissingApiKey { provider: "Gemini" })));
    }

    #[tokio::test]
    async fn deterministic_reply_is_fixed() {
        let provider = DeterministicProvider::with_reply("steady");
        let response = provider
            .complete(CompletionRequest::new("x"))
            .await
            .unwrap();
        assert_eq!(response.content, "steady");
    }
}
