//! Error types for meeting AI operations.

use std::fmt;

/// Universal error type that abstracts agent-provider errors into common variants.
///
/// Provider implementations map their native errors (HTTP status codes, transport
/// failures, JSON decoding errors) to these variants so callers can react without
/// knowing which agent service produced them. No variant is retried.
#[derive(Debug)]
pub enum Error {
    /// The caller asked for something the engine does not know how to do.
    Validation(String),

    /// The agent answered with a non-success status, or the request could not be
    /// delivered at all (DNS, connection refused, TLS).
    UpstreamFailure(String),

    /// The agent did not answer within the configured timeout.
    UpstreamTimeout(String),

    /// The agent answered successfully but the body was not the expected JSON shape.
    MalformedResponse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::UpstreamFailure(msg) => write!(f, "Upstream failure: {}", msg),
            Error::UpstreamTimeout(msg) => write!(f, "Upstream timeout: {}", msg),
            Error::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
