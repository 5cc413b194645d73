use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Body of `POST /smart-assistant`.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = params::smart_assistant::SmartAssistantParams)]
pub(crate) struct SmartAssistantParams {
    pub(crate) transcript: Option<String>,
    /// The agenda item currently being discussed, used for drift detection.
    pub(crate) current_goal: Option<String>,
    /// Free-form context forwarded to the agent, e.g. goal index and recording state.
    #[schema(value_type = Option<Object>)]
    pub(crate) meeting_context: Option<Value>,
}
