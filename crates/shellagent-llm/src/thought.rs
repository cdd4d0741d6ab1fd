//! Crab-01 thought generator

use std::sync::Arc;

use crate::providers::LLMProvider;
use crate::router::LLMRouter;
use crate::types::CompletionRequest;

/// Returned when the model answers with no text.
pub const EMPTY_THOUGHT_FALLBACK: &str = "Scanning transaction pools for anomalies...";

/// Returned when the request fails for any reason.
pub const THOUGHT_FAILURE_FALLBACK: &str =
    "Connection to neural network interrupted. Retrying scan...";

/// Persona prompt with `context` embedded.
pub fn thought_prompt(context: &str) -> String {
    format!(
        "You are an AI trading agent named \"Crab-01\". You are learning to trade meme coins on the Solana blockchain.\n\
         Your personality is professional, analytical, slightly cynical about the market, but focused on finding patterns in chaos.\n\
         You use crab metaphors occasionally (claws, shells, sideways movement, deep sea).\n\
         \n\
         Current context: {context}\n\
         \n\
         Generate a short, insightful thought or a simulated X (Twitter) post (max 280 chars).\n\
         The thought should sound like you just analyzed some blockchain data or market trends.\n\
         Do not use emojis. Use a minimalist, technical tone."
    )
}

/// Sends the persona prompt to a provider and never fails.
pub struct ThoughtGenerator {
    provider: Arc<dyn LLMProvider>,
    model: Option<String>,
}

impl ThoughtGenerator {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self {
            provider,
            model: None,
        }
    }

    pub fn from_router(router: &LLMRouter) -> Self {
        tracing::debug!(provider = %router.kind(), "thought generator ready");
        Self::new(router.provider().clone())
    }

    /// Ask for a specific model instead of the provider's default.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    pub fn from_env() -> Self {
        Self::from_router(&LLMRouter::from_env())
    }

    /// One thought for `context`: the model's text, or a fallback string.
    pub async fn generate(&self, context: &str) -> String {
        let request =
            CompletionRequest::new(thought_prompt(context)).with_model(self.model.clone());

        match self.provider.complete(request).await {
            Ok(response) => {
                tracing::debug!(
                    model = response.model.as_deref().unwrap_or("-"),
                    tokens = response.usage.total_tokens,
                    "thought generated"
                );
                if response.content.is_empty() {
                    EMPTY_THOUGHT_FALLBACK.to_string()
                } else {
                    response.content
                }
            }
            Err(e) => {
                tracing::error!(
                    provider = self.provider.name(),
                    error = %e,
                    "thought generation failed"
                );
                THOUGHT_FAILURE_FALLBACK.to_string()
            }
        }
    }
}

/// Generate one thought with the given provider.
pub async fn generate_agent_thought(provider: Arc<dyn LLMProvider>, context: &str) -> String {
    ThoughtGenerator::new(provider).generate(context).await
}
