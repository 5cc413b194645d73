//! Meeting-intelligence agent provider trait.

use crate::types::agent::Response;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for hosted text-generation agents that analyze meeting transcripts.
///
/// Implementations send a single prompt to a named agent and return its raw
/// output. They own transport concerns (authentication, timeouts) and must map
/// every failure onto [`Error`]'s upstream variants. Retrying is not their job.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send `input` to the agent identified by `agent_id` and return its response.
    async fn query(&self, agent_id: &str, input: &str) -> std::result::Result<Response, Error>;
}
