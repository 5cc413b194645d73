//! Structured insight shapes produced from agent output.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::aggregator::AnalysisMode;
use crate::types::meeting::Task;

/// Time-management hint extracted from the agent output.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TimeOptimization {
    pub suggestion: String,
}

/// Basic transcript analysis: the agent text verbatim plus a few suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BasicInsights {
    pub summary: String,
    pub diagram: String,
    pub tasks: Vec<Task>,
    pub suggestions: Vec<String>,
}

/// Live smart-assistant feedback for a meeting in progress.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AssistantInsights {
    pub suggestions: Vec<String>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub time_optimization: TimeOptimization,
    pub agenda_drift_detection: bool,
}

/// Post-meeting analysis with an efficiency score.
///
/// `technical_specs`, `follow_up_meetings` and `risk_analysis` are always empty;
/// clients expect the keys to be present.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MeetingAnalysis {
    pub executive_summary: String,
    pub action_items: Vec<String>,
    #[schema(value_type = Object)]
    pub technical_specs: Map<String, Value>,
    #[schema(value_type = Vec<Object>)]
    pub follow_up_meetings: Vec<Value>,
    pub efficiency_score: f64,
    pub key_decisions: Vec<String>,
    #[schema(value_type = Object)]
    pub risk_analysis: Map<String, Value>,
}

/// One of the three insight shapes, selected by [`AnalysisMode`].
///
/// Serializes as the inner shape with no tag, which is exactly the JSON body
/// clients receive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Insights {
    Basic(BasicInsights),
    Assistant(AssistantInsights),
    Analysis(MeetingAnalysis),
}

impl Insights {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            Insights::Basic(_) => AnalysisMode::Basic,
            Insights::Assistant(_) => AnalysisMode::Assistant,
            Insights::Analysis(_) => AnalysisMode::Analysis,
        }
    }

    /// Tasks worth forwarding to project-management tools.
    ///
    /// Basic insights carry their own task list, a meeting analysis turns each
    /// action item into a task, and assistant feedback never produces tasks.
    pub fn derived_tasks(&self) -> Vec<Task> {
        match self {
            Insights::Basic(basic) => basic.tasks.clone(),
            Insights::Assistant(_) => Vec::new(),
            Insights::Analysis(analysis) => analysis
                .action_items
                .iter()
                .map(|item| Task::from_action_item(item))
                .collect(),
        }
    }
}
