//! LLM Router - Selects and manages LLM providers

use std::sync::Arc;

use crate::providers::*;
use crate::types::*;

/// The LLM Router selects and manages providers based on configuration
pub struct LLMRouter {
    provider: Arc<dyn LLMProvider>,
    kind: ProviderKind,
}

impl LLMRouter {
    /// Create a router with a specific provider
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        let kind = provider.kind();
        Self { provider, kind }
    }

    /// Create a router from environment variables
    ///
    /// Reads `SHELLAGENT_LLM_PROVIDER` to select the provider:
    /// - `gemini` (default): Google Gemini API
    /// - `deterministic`: No LLM, canned reply
    pub fn from_env() -> Self {
        // Try to load .env file (ignore errors)
        let _ = dotenvy::dotenv();

        let provider_name =
            std::env::var("SHELLAGENT_LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

        let kind = ProviderKind::from_str(&provider_name).unwrap_or_else(|| {
            tracing::warn!(%provider_name, "unknown LLM provider, using gemini");
            ProviderKind::Gemini
        });

        Self::from_kind(kind)
    }

    /// Create a router for a specific provider kind
    pub fn from_kind(kind: ProviderKind) -> Self {
        let provider: Arc<dyn LLMProvider> = match kind {
            ProviderKind::Gemini => Arc::new(GeminiProvider::from_env()),
            ProviderKind::Deterministic => Arc::new(DeterministicProvider::new()),
        };

        Self { provider, kind }
    }

    /// Get the current provider
    pub fn provider(&self) -> &Arc<dyn LLMProvider> {
        &self.provider
    }

    /// Get the provider kind
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deterministic_router() {
        let router = LLMRouter::from_kind(ProviderKind::Deterministic);
        assert!(router.provider().is_available().await);
        assert_eq!(router.kind(), ProviderKind::Deterministic);

        let request = CompletionRequest::new("Hello");
        let response = router.provider().complete(request).await.unwrap();

        assert_eq!(response.model.as_deref(), Some("deterministic"));
    }

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!(ProviderKind::from_str("gemini"), Some(ProviderKind::Gemini));
        assert_eq!(ProviderKind::from_str("Google"), Some(ProviderKind::Gemini));
        assert_eq!(
            ProviderKind::from_str("offline"),
            Some(ProviderKind::Deterministic)
        );
        assert_eq!(ProviderKind::from_str("unknown"), None);
    }

    #[test]
    fn test_router_wraps_given_provider() {
        let router = LLMRouter::new(Arc::new(DeterministicProvider::new()));
        assert_eq!(router.kind(), ProviderKind::Deterministic);
        assert_eq!(router.provider().name(), "Deterministic");
    }
}
