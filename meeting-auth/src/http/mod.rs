//! HTTP client building with authentication and timeouts.

mod client;

pub use client::{AuthenticatedClient, AuthenticatedClientBuilder, HttpClientConfig};
