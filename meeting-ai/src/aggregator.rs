//! Assemble structured insights from a single agent response.

use std::fmt;
use std::str::FromStr;

use serde_json::Map;

use crate::classifier::{classify, Category};
use crate::drift::detect_drift;
use crate::error::Error;
use crate::scoring::efficiency_score;
use crate::types::insights::{
    AssistantInsights, BasicInsights, Insights, MeetingAnalysis, TimeOptimization,
};
use crate::types::meeting::Goal;

/// Fallback time-management hint when the agent says nothing about time.
pub const DEFAULT_TIME_SUGGESTION: &str = "Consider time management for remaining topics";

/// Lines longer than this (in characters) qualify as an executive summary.
const SUMMARY_LINE_MIN_CHARS: usize = 50;

/// Length of the executive summary fallback taken from the start of the text.
const SUMMARY_FALLBACK_CHARS: usize = 200;

/// Which insight shape to build from the agent output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Verbatim summary plus suggestions.
    Basic,
    /// Live suggestions, insights, recommendations, time hint and drift flag.
    Assistant,
    /// Executive summary, action items, decisions and efficiency score.
    Analysis,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Basic => "basic",
            AnalysisMode::Assistant => "assistant",
            AnalysisMode::Analysis => "analysis",
        }
    }
}

impl FromStr for AnalysisMode {
    type Err = Error;

    /// Unknown modes are rejected rather than falling back to `basic`.
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "basic" => Ok(AnalysisMode::Basic),
            "assistant" => Ok(AnalysisMode::Assistant),
            "analysis" => Ok(AnalysisMode::Analysis),
            other => Err(Error::Validation(format!("Unsupported analysis mode: {other}"))),
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request-supplied inputs that are not part of the agent text.
///
/// `current_goal` feeds drift detection in assistant mode; `goals` and
/// `decision_count` feed the efficiency score in analysis mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub current_goal: &'a str,
    pub goals: &'a [Goal],
    pub decision_count: usize,
}

/// Build the insight shape selected by `mode` from the agent output `text`.
pub fn aggregate(text: &str, mode: AnalysisMode, context: &AnalysisContext<'_>) -> Insights {
    match mode {
        AnalysisMode::Basic => Insights::Basic(BasicInsights {
            summary: text.to_string(),
            diagram: String::new(),
            tasks: Vec::new(),
            suggestions: classify(text, Category::Suggestion),
        }),
        AnalysisMode::Assistant => Insights::Assistant(AssistantInsights {
            suggestions: classify(text, Category::Suggestion),
            insights: classify(text, Category::Insight),
            recommendations: classify(text, Category::Recommendation),
            time_optimization: time_optimization(text),
            agenda_drift_detection: detect_drift(text, context.current_goal),
        }),
        AnalysisMode::Analysis => Insights::Analysis(MeetingAnalysis {
            executive_summary: executive_summary(text),
            action_items: classify(text, Category::ActionItem),
            technical_specs: Map::new(),
            follow_up_meetings: Vec::new(),
            efficiency_score: efficiency_score(context.goals, context.decision_count),
            key_decisions: classify(text, Category::Decision),
            risk_analysis: Map::new(),
        }),
    }
}

/// First line mentioning time management, or [`DEFAULT_TIME_SUGGESTION`].
pub fn time_optimization(text: &str) -> TimeOptimization {
    let suggestion = classify(text, Category::TimeOptimization)
        .into_iter()
        .next()
        .unwrap_or_else(|| DEFAULT_TIME_SUGGESTION.to_string());

    TimeOptimization { suggestion }
}

/// Pick the executive summary out of the agent text.
///
/// The first line that mentions "summary" or runs past fifty characters wins.
/// Without one, the opening two hundred characters are used, with an ellipsis
/// when the text was cut.
pub fn executive_summary(text: &str) -> String {
    let summary_line = text.split('\n').find(|line| {
        line.to_lowercase().contains("summary") || line.chars().count() > SUMMARY_LINE_MIN_CHARS
    });

    if let Some(line) = summary_line {
        return line.trim().to_string();
    }

    if text.chars().count() > SUMMARY_FALLBACK_CHARS {
        let head: String = text.chars().take(SUMMARY_FALLBACK_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGENT_OUTPUT: &str = "Summary: the team reviewed the auth service.\n\
        We noticed a pattern of slow token refresh.\n\
        I suggest moving sessions to Redis.\n\
        You should schedule a load test.\n\
        Action: Alice to draft the migration.\n\
        We agreed to ship JWT rotation next sprint.";

    #[test]
    fn test_mode_parsing() {
        for mode in [AnalysisMode::Basic, AnalysisMode::Assistant, AnalysisMode::Analysis] {
            assert_eq!(mode.as_str().parse::<AnalysisMode>().unwrap(), mode);
        }
        assert!(matches!(
            "summary".parse::<AnalysisMode>(),
            Err(Error::Validation(_))
        ));
        assert!("Basic".parse::<AnalysisMode>().is_err());
    }

    #[test]
    fn test_basic_mode_keeps_text_verbatim() {
        let insights = aggregate(AGENT_OUTPUT, AnalysisMode::Basic, &AnalysisContext::default());

        let Insights::Basic(basic) = insights else {
            panic!("expected basic insights");
        };
        assert_eq!(basic.summary, AGENT_OUTPUT);
        assert!(basic.diagram.is_empty());
        assert!(basic.tasks.is_empty());
        assert_eq!(basic.suggestions, vec!["I suggest moving sessions to Redis."]);
    }

    #[test]
    fn test_assistant_mode() {
        let context = AnalysisContext {
            current_goal: "token refresh",
            ..AnalysisContext::default()
        };
        let Insights::Assistant(assistant) =
            aggregate(AGENT_OUTPUT, AnalysisMode::Assistant, &context)
        else {
            panic!("expected assistant insights");
        };

        assert_eq!(
            assistant.insights,
            vec!["We noticed a pattern of slow token refresh."]
        );
        assert_eq!(
            assistant.recommendations,
            vec!["You should schedule a load test."]
        );
        assert_eq!(
            assistant.time_optimization.suggestion,
            "You should schedule a load test."
        );
        assert!(!assistant.agenda_drift_detection);
    }

    #[test]
    fn test_assistant_mode_reports_drift() {
        let context = AnalysisContext {
            current_goal: "hiring budget",
            ..AnalysisContext::default()
        };
        let insights = aggregate(AGENT_OUTPUT, AnalysisMode::Assistant, &context);
        let Insights::Assistant(assistant) = insights else {
            panic!("expected assistant insights");
        };
        assert!(assistant.agenda_drift_detection);
    }

    #[test]
    fn test_analysis_mode() {
        let goals = vec![
            Goal {
                completed: Some(true),
                ..Goal::default()
            },
            Goal::default(),
        ];
        let context = AnalysisContext {
            goals: &goals,
            decision_count: 2,
            ..AnalysisContext::default()
        };
        let Insights::Analysis(analysis) =
            aggregate(AGENT_OUTPUT, AnalysisMode::Analysis, &context)
        else {
            panic!("expected meeting analysis");
        };

        assert_eq!(
            analysis.executive_summary,
            "Summary: the team reviewed the auth service."
        );
        assert_eq!(
            analysis.action_items,
            vec!["Action: Alice to draft the migration."]
        );
        assert_eq!(
            analysis.key_decisions,
            vec!["We agreed to ship JWT rotation next sprint."]
        );
        assert_eq!(analysis.efficiency_score, 500.0);
        assert!(analysis.technical_specs.is_empty());
        assert!(analysis.follow_up_meetings.is_empty());
        assert!(analysis.risk_analysis.is_empty());
    }

    #[test]
    fn test_modes_degrade_on_empty_text() {
        let context = AnalysisContext::default();
        for mode in [
            AnalysisMode::Basic,
            AnalysisMode::Assistant,
            AnalysisMode::Analysis,
        ] {
            let insights = aggregate("", mode, &context);
            assert_eq!(insights.mode(), mode);
        }
        assert_eq!(time_optimization("").suggestion, DEFAULT_TIME_SUGGESTION);
        assert_eq!(executive_summary(""), "");
    }

    #[test]
    fn test_executive_summary_prefers_long_line() {
        let long = "The architecture review covered every service boundary in detail.";
        let text = format!("short\n  {long}  \nmore");
        assert_eq!(executive_summary(&text), long);
    }

    #[test]
    fn test_executive_summary_falls_back_to_prefix() {
        let text = "ok\n".repeat(100);
        let summary = executive_summary(&text);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), 203);

        assert_eq!(executive_summary("tiny\ntext"), "tiny\ntext");
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(AnalysisMode::Basic.to_string(), "basic");
        assert_eq!(AnalysisMode::Assistant.to_string(), "assistant");
        assert_eq!(AnalysisMode::Analysis.to_string(), "analysis");
    }
}
