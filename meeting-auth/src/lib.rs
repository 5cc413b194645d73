//! # meeting-auth
//!
//! Outbound authentication for the third-party services the relay talks to:
//! - API key authentication for service providers (Mastra, Composio)
//! - HTTP client building with a fixed per-client timeout
//!
//! ## Architecture
//!
//! Gateway clients in `domain` build their `reqwest` clients through
//! [`http::AuthenticatedClientBuilder`]. Credentials are optional: a client
//! built without one sends anonymous requests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meeting_auth::{
//!     api_key::{ApiKeyProvider, BearerTokenAuth},
//!     http::AuthenticatedClientBuilder,
//! };
//! ```

pub mod api_key;
pub mod error;
pub mod http;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
