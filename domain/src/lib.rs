//! Transcript relay domain layer.
//!
//! Talks to the upstream meeting-intelligence agent and the task-push service,
//! and runs agent output through the `meeting-ai` insight engine.
//!
//! The analysis types are re-exported here so that consumers of the `domain`
//! crate (the `web` layer) do not need to depend on `meeting-ai` directly.
pub use meeting_ai::traits::agent::Provider as AgentProvider;
pub use meeting_ai::types::insights::{
    AssistantInsights, BasicInsights, MeetingAnalysis, TimeOptimization,
};
pub use meeting_ai::types::meeting::{Goal, Task};
pub use meeting_ai::{AnalysisMode, Insights};

pub mod error;
pub mod gateway;
pub mod transcript;
