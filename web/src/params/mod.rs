//! This module holds typed parameters for the transcript endpoints' JSON bodies.
//!
//! Every body carries a `transcript`. It is deserialized as optional so a
//! missing transcript is answered with a descriptive 400 rather than the JSON
//! extractor's generic rejection. An explicit `null` deserializes the same way
//! and counts as missing. An empty string is a transcript like any other.

use domain::error::Error as DomainError;

pub(crate) mod meeting_analysis;
pub(crate) mod smart_assistant;
pub(crate) mod transcript;

/// Message returned when a body has no transcript.
pub(crate) const MISSING_TRANSCRIPT: &str = "Missing transcript in request";

/// Require that the body carried a transcript.
pub(crate) fn require_transcript(transcript: Option<String>) -> Result<String, DomainError> {
    transcript.ok_or_else(|| DomainError::validation(MISSING_TRANSCRIPT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_transcript() {
        assert_eq!(
            require_transcript(Some("hello".to_string())).unwrap(),
            "hello"
        );
        assert_eq!(require_transcript(Some(String::new())).unwrap(), "");
        assert!(require_transcript(None).is_err());
    }
}
