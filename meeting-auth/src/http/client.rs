//! Authenticated HTTP client builder.

use std::time::Duration;

use reqwest::{IntoUrl, RequestBuilder};
use tracing::debug;

use crate::api_key::ProviderAuth;
use crate::error::Error;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout, covering connect through reading the body.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("meeting-auth/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP client that applies provider authentication, when configured, to every request.
///
/// Requests are sent exactly once; there is no retry layer.
pub struct AuthenticatedClient {
    client: reqwest::Client,
    auth: Option<Box<dyn ProviderAuth>>,
}

impl AuthenticatedClient {
    /// Start a POST request to `url`.
    pub fn post<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.authenticate(self.client.post(url))
    }

    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(auth) => auth.authenticate(request),
            None => request,
        }
    }
}

/// Builder for creating authenticated HTTP clients.
///
/// Provides a fluent API for constructing HTTP clients with:
/// - Authentication (bearer tokens), optional
/// - Timeout configuration
/// - A custom user agent
pub struct AuthenticatedClientBuilder {
    config: HttpClientConfig,
    auth: Option<Box<dyn ProviderAuth>>,
}

impl AuthenticatedClientBuilder {
    /// Create a new client builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: HttpClientConfig::default(),
            auth: None,
        }
    }

    /// Set the authentication provider.
    pub fn with_auth(mut self, auth: Box<dyn ProviderAuth>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    /// Build the configured HTTP client.
    pub fn build(self) -> Result<AuthenticatedClient, Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(self.config.timeout)
            .user_agent(self.config.user_agent)
            .build()?;

        debug!(
            "Built HTTP client (timeout: {:?}, credentials: {})",
            self.config.timeout,
            self.auth
                .as_ref()
                .map_or("none", |auth| auth.provider().as_str())
        );

        Ok(AuthenticatedClient {
            client,
            auth: self.auth,
        })
    }
}

impl Default for AuthenticatedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
