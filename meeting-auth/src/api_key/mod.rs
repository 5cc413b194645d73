//! API key authentication for service providers.
//!
//! Provides traits and implementations for authenticating requests to services
//! that use API keys (Mastra, Composio).

mod auth;
mod bearer;

pub use auth::{ApiKeyProvider, ProviderAuth};
pub use bearer::BearerTokenAuth;
