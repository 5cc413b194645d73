//! Standard Bearer token authentication.

use reqwest::header::HeaderValue;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

use super::{ApiKeyProvider, ProviderAuth};
use crate::error::{api_key_error, ApiKeyErrorKind, Error};

/// Standard Bearer token authentication.
///
/// Uses the standard `Authorization: Bearer <token>` header pattern.
pub struct BearerTokenAuth {
    provider: ApiKeyProvider,
    token: SecretString,
}

impl BearerTokenAuth {
    /// Create a new Bearer token authenticator.
    ///
    /// Fails when the token cannot be carried in an HTTP header, so a bad key
    /// surfaces at startup instead of on the first request.
    pub fn new(provider: ApiKeyProvider, token: SecretString) -> Result<Self, Error> {
        let header = format!("Bearer {}", token.expose_secret());
        if HeaderValue::from_str(&header).is_err() {
            return Err(api_key_error(
                ApiKeyErrorKind::InvalidFormat,
                "API key contains characters not allowed in an HTTP header",
            ));
        }

        Ok(Self { provider, token })
    }
}

impl ProviderAuth for BearerTokenAuth {
    fn provider(&self) -> ApiKeyProvider {
        self.provider
    }

    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.token.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_bearer_token_auth_sets_authorization_header() {
        let token = SecretString::new("test_token".to_string());
        let auth = BearerTokenAuth::new(ApiKeyProvider::Mastra, token).unwrap();
        assert_eq!(auth.provider(), ApiKeyProvider::Mastra);

        let request = auth
            .authenticate(reqwest::Client::new().post("http://localhost/agents"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer test_token"
        );
    }

    #[test]
    fn test_bearer_token_rejects_header_breaking_key() {
        let token = SecretString::new("bad\nkey".to_string());
        let err = BearerTokenAuth::new(ApiKeyProvider::Composio, token)
            .err()
            .unwrap();

        assert_eq!(err.error_kind, ErrorKind::ApiKey(ApiKeyErrorKind::InvalidFormat));
    }
}
