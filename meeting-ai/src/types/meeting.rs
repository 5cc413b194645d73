//! Meeting goals and the tasks derived from a meeting.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A meeting goal as supplied by the caller.
///
/// Only the completion flag matters for scoring. Every other field the caller
/// sends (estimates, complexity, ids) is kept so it can be echoed back into
/// the agent prompt untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Goal {
    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}

/// A unit of follow-up work forwarded to project-management tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    #[serde(default = "Task::default_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default = "Task::default_priority")]
    pub priority: String,
}

impl Task {
    pub const DEFAULT_TITLE: &'static str = "Untitled Task";
    pub const DEFAULT_PRIORITY: &'static str = "medium";

    /// Build an unassigned, medium-priority task from an extracted action item line.
    pub fn from_action_item(line: &str) -> Self {
        Self {
            title: line.to_string(),
            ..Self::default()
        }
    }

    fn default_title() -> String {
        Self::DEFAULT_TITLE.to_string()
    }

    fn default_priority() -> String {
        Self::DEFAULT_PRIORITY.to_string()
    }
}

impl Default for Task {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            description: String::new(),
            assignee: String::new(),
            priority: Self::default_priority(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_goal_keeps_caller_fields() {
        let goal: Goal = serde_json::from_value(json!({
            "id": 3,
            "title": "Pick a cache",
            "completed": true,
            "estimatedTime": 15
        }))
        .unwrap();

        assert!(goal.is_completed());
        assert_eq!(goal.title.as_deref(), Some("Pick a cache"));
        assert_eq!(goal.details.get("estimatedTime"), Some(&json!(15)));

        let echoed = serde_json::to_value(&goal).unwrap();
        assert_eq!(echoed["id"], json!(3));
        assert_eq!(echoed["completed"], json!(true));
    }

    #[test]
    fn test_goal_without_flag_is_not_completed() {
        let goal: Goal = serde_json::from_value(json!({"title": "Budget"})).unwrap();
        assert!(!goal.is_completed());

        let goal: Goal = serde_json::from_value(json!({"completed": null})).unwrap();
        assert!(!goal.is_completed());
    }

    #[test]
    fn test_task_defaults() {
        let task: Task = serde_json::from_value(json!({})).unwrap();
        assert_eq!(task.title, "Untitled Task");
        assert_eq!(task.priority, "medium");
        assert!(task.description.is_empty());
        assert!(task.assignee.is_empty());
    }

    #[test]
    fn test_task_from_action_item() {
        let task = Task::from_action_item("Action: draft the migration plan");
        assert_eq!(task.title, "Action: draft the migration plan");
        assert_eq!(task.priority, "medium");
    }
}
