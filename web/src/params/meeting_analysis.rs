use domain::Goal;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Body of `POST /meeting-analysis`.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = params::meeting_analysis::MeetingAnalysisParams)]
pub(crate) struct MeetingAnalysisParams {
    pub(crate) transcript: Option<String>,
    /// Meeting goals; only `completed` is interpreted, everything else is passed to the agent.
    #[schema(value_type = Option<Vec<Object>>)]
    pub(crate) goals: Option<Vec<Goal>>,
    /// Decisions recorded during the meeting. Only the count is scored.
    #[schema(value_type = Option<Vec<Object>>)]
    pub(crate) decisions: Option<Vec<Value>>,
}
