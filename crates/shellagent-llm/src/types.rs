//! Request, response and error types shared by the providers

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    /// No API key configured; nothing was sent.
    #[error("{provider} API key is not set")]
    MissingApiKey { provider: &'static str },

    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode response: {message}")]
    Decode { message: String },
}

pub type Result<T> = std::result::Result<T, LLMError>;

/// One single-turn prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Overrides the provider's configured model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Generated text plus what it cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    #[serde(default)]
    pub usage: TokenUsage,
    /// Model that answered, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl CompletionResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: TokenUsage::default(),
            model: None,
        }
    }
}

/// Which provider the router builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Hosted `generateContent` endpoint
    Gemini,
    /// Canned reply, no network
    Deterministic,
}

impl ProviderKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Some(Self::Gemini),
            "deterministic" | "none" | "offline" => Some(Self::Deterministic),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Gemini => "gemini",
            Self::Deterministic => "deterministic",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_override_is_optional() {
        let plain = CompletionRequest::new("idle market");
        assert_eq!(plain.model, None);

        let pinned = CompletionRequest::new("idle market").with_model(Some("gemini-x".into()));
        assert_eq!(pinned.model.as_deref(), Some("gemini-x"));
        assert_eq!(pinned.with_model(None).model, None);
    }

    #[test]
    fn provider_kind_round_trips_through_display() {
        for kind in [ProviderKind::Gemini, ProviderKind::Deterministic] {
            assert_eq!(ProviderKind::from_str(&kind.to_string()), Some(kind));
        }
    }

    #[test]
    fn status_error_message() {
        let err = LLMError::Status {
            status: 429,
            body: "quota".into(),
        };
        assert_eq!(err.to_string(), "HTTP 429: quota");
    }
}
