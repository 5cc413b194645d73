//! Transcript processing: prompt the agent, extract insights, forward tasks.
//!
//! Each entry point builds the agent prompt for its request shape, queries the
//! agent once through an [`AgentProvider`], runs the output through the
//! `meeting-ai` aggregator and, when task push is configured, forwards any
//! derived tasks to the project-management backends.

use crate::error::Error;
use crate::gateway::composio::ComposioClient;
use log::*;
use meeting_ai::traits::agent::Provider as AgentProvider;
use meeting_ai::types::meeting::Goal;
use meeting_ai::{aggregate, AnalysisContext, AnalysisMode, Insights};
use serde_json::Value;
use service::config::Config;
use std::fmt;
use std::str::FromStr;

/// Agent used for live in-meeting suggestions.
pub const MEETING_ASSISTANT_AGENT: &str = "meeting-assistant";

/// Agent used for transcript and whole-meeting analysis.
pub const TREND_EXPLAINER_AGENT: &str = "trend-explainer";

/// Number of transcript characters echoed to the log when a request arrives.
const TRANSCRIPT_LOG_PREVIEW_CHARS: usize = 100;

/// The kind of analysis a webhook caller asks for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    #[default]
    EngineeringDiscussionAnalysis,
    SmartAssistantInsights,
    ComprehensiveMeetingAnalysis,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::EngineeringDiscussionAnalysis => "engineering_discussion_analysis",
            RequestType::SmartAssistantInsights => "smart_assistant_insights",
            RequestType::ComprehensiveMeetingAnalysis => "comprehensive_meeting_analysis",
        }
    }

    pub fn agent_id(&self) -> &'static str {
        match self {
            RequestType::SmartAssistantInsights => MEETING_ASSISTANT_AGENT,
            RequestType::EngineeringDiscussionAnalysis
            | RequestType::ComprehensiveMeetingAnalysis => TREND_EXPLAINER_AGENT,
        }
    }

    pub fn prompt(&self, transcript: &str) -> String {
        match self {
            RequestType::EngineeringDiscussionAnalysis => {
                format!("Analyze this engineering discussion transcript: {transcript}")
            }
            RequestType::SmartAssistantInsights => format!(
                "Analyze this meeting transcript and provide smart suggestions: {transcript}"
            ),
            RequestType::ComprehensiveMeetingAnalysis => format!(
                "Analyze this meeting transcript and provide comprehensive insights: {transcript}"
            ),
        }
    }
}

impl FromStr for RequestType {
    type Err = Error;

    fn from_str(request_type: &str) -> Result<Self, Self::Err> {
        match request_type {
            "engineering_discussion_analysis" => Ok(RequestType::EngineeringDiscussionAnalysis),
            "smart_assistant_insights" => Ok(RequestType::SmartAssistantInsights),
            "comprehensive_meeting_analysis" => Ok(RequestType::ComprehensiveMeetingAnalysis),
            other => Err(Error::validation(format!(
                "Unsupported request_type: {other}"
            ))),
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analyze a webhook transcript. Always produces the basic insight shape.
pub async fn process_transcript(
    config: &Config,
    provider: &dyn AgentProvider,
    transcript: &str,
    request_type: RequestType,
) -> Result<Insights, Error> {
    info!(
        "Received {request_type} transcript: {}...",
        preview(transcript, TRANSCRIPT_LOG_PREVIEW_CHARS)
    );

    let prompt = request_type.prompt(transcript);
    analyze(
        config,
        provider,
        request_type.agent_id(),
        &prompt,
        AnalysisMode::Basic,
        &AnalysisContext::default(),
    )
    .await
}

/// Produce live suggestions for a meeting in progress.
///
/// `meeting_context` is passed through to the agent as JSON; `current_goal`
/// also drives drift detection.
pub async fn process_smart_assistant(
    config: &Config,
    provider: &dyn AgentProvider,
    transcript: &str,
    current_goal: &str,
    meeting_context: &Value,
) -> Result<Insights, Error> {
    info!("Smart assistant request for goal: {current_goal:?}");

    let prompt = smart_assistant_prompt(transcript, current_goal, meeting_context)?;
    let context = AnalysisContext {
        current_goal,
        ..AnalysisContext::default()
    };

    analyze(
        config,
        provider,
        MEETING_ASSISTANT_AGENT,
        &prompt,
        AnalysisMode::Assistant,
        &context,
    )
    .await
}

/// Analyze a finished meeting against its goals and the decisions recorded.
pub async fn process_meeting_analysis(
    config: &Config,
    provider: &dyn AgentProvider,
    transcript: &str,
    goals: &[Goal],
    decisions: &[Value],
) -> Result<Insights, Error> {
    info!(
        "Meeting analysis request with {} goals and {} decisions",
        goals.len(),
        decisions.len()
    );

    let prompt = meeting_analysis_prompt(transcript, goals, decisions)?;
    let context = AnalysisContext {
        goals,
        decision_count: decisions.len(),
        ..AnalysisContext::default()
    };

    analyze(
        config,
        provider,
        TREND_EXPLAINER_AGENT,
        &prompt,
        AnalysisMode::Analysis,
        &context,
    )
    .await
}

async fn analyze(
    config: &Config,
    provider: &dyn AgentProvider,
    agent_id: &str,
    prompt: &str,
    mode: AnalysisMode,
    context: &AnalysisContext<'_>,
) -> Result<Insights, Error> {
    let response = provider.query(agent_id, prompt).await.map_err(|e| {
        warn!("Agent {agent_id} query failed: {e}");
        Error::from(e)
    })?;

    let insights = aggregate(&response.output, mode, context);
    info!("Built {mode} insights from {agent_id} output");

    push_derived_tasks(config, &insights).await;
    Ok(insights)
}

/// Forward tasks derived from `insights`. Never fails; problems are logged.
async fn push_derived_tasks(config: &Config, insights: &Insights) {
    let tasks = insights.derived_tasks();
    if tasks.is_empty() {
        return;
    }

    if !config.task_push_enabled() {
        info!(
            "Composio API key not configured, skipping push of {} tasks",
            tasks.len()
        );
        return;
    }

    match ComposioClient::new(config) {
        Ok(client) => {
            client.push_tasks(&tasks).await;
        }
        Err(e) => warn!("Skipping task push: {e}"),
    }
}

fn smart_assistant_prompt(
    transcript: &str,
    current_goal: &str,
    meeting_context: &Value,
) -> Result<String, Error> {
    let meeting_context = serde_json::to_string(meeting_context)?;
    Ok(format!(
        "Current meeting goal: {current_goal}\n\
         Meeting context: {meeting_context}\n\
         Transcript: {transcript}\n\n\
         Provide smart suggestions, insights, and recommendations for this meeting."
    ))
}

fn meeting_analysis_prompt(
    transcript: &str,
    goals: &[Goal],
    decisions: &[Value],
) -> Result<String, Error> {
    let goals = serde_json::to_string(goals)?;
    let decisions = serde_json::to_string(decisions)?;
    Ok(format!(
        "Meeting Goals: {goals}\n\
         Decisions Made: {decisions}\n\
         Transcript: {transcript}\n\n\
         Provide a comprehensive analysis of this meeting including executive summary, \
         action items, efficiency score, and key insights."
    ))
}

/// The first `max_chars` characters of `text`, cut on a character boundary.
fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
