//! Types for agent requests and responses.

use serde::{Deserialize, Serialize};

/// Request body sent to an agent's query endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    pub input: String,
}

/// Response body returned by an agent.
///
/// Only `output` is consumed; any other fields the agent sends are ignored.
/// A missing `output` is treated as an empty answer rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_ignores_unknown_fields() {
        let response: Response =
            serde_json::from_str(r#"{"output": "done", "usage": {"tokens": 12}}"#).unwrap();
        assert_eq!(response.output, "done");
    }

    #[test]
    fn test_response_missing_output_defaults_to_empty() {
        let response: Response = serde_json::from_str("{}").unwrap();
        assert!(response.output.is_empty());
    }

    #[test]
    fn test_response_rejects_non_string_output() {
        assert!(serde_json::from_str::<Response>(r#"{"output": 42}"#).is_err());
    }
}
