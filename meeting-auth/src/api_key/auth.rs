//! Provider authentication trait.

use reqwest::RequestBuilder;

/// Known API key providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyProvider {
    Mastra,
    Composio,
}

impl ApiKeyProvider {
    /// Get the provider identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiKeyProvider::Mastra => "mastra",
            ApiKeyProvider::Composio => "composio",
        }
    }
}

/// Trait for authenticating HTTP requests with API keys or bearer tokens.
///
/// Implementations decorate an outgoing request with whatever credential
/// header their provider expects.
pub trait ProviderAuth: Send + Sync {
    /// Get the provider identifier.
    fn provider(&self) -> ApiKeyProvider;

    /// Apply authentication to a request builder.
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_provider_as_str() {
        assert_eq!(ApiKeyProvider::Mastra.as_str(), "mastra");
        assert_eq!(ApiKeyProvider::Composio.as_str(), "composio");
    }
}
