//! Composio API client for forwarding derived tasks to project-management tools.
//!
//! Every task is delivered to two backends, one request each:
//! - Notion: `POST {base}/notion/tasks`
//! - Jira: `POST {base}/jira/issues`
//!
//! Delivery is best effort. A failed delivery is logged and counted in the
//! returned [`PushSummary`] but never fails the transcript request.

use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use log::*;
use meeting_ai::types::meeting::Task;
use meeting_auth::api_key::{ApiKeyProvider, BearerTokenAuth};
use meeting_auth::http::{AuthenticatedClient, AuthenticatedClientBuilder};
use reqwest::StatusCode;
use secrecy::SecretString;
use serde::Serialize;
use service::config::Config;
use std::fmt;
use std::time::Duration;

/// Maximum time allowed for one task delivery.
pub const TASK_PUSH_TIMEOUT: Duration = Duration::from_secs(10);

/// A project-management tool reachable through Composio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskBackend {
    Notion,
    Jira,
}

impl TaskBackend {
    pub const ALL: [TaskBackend; 2] = [TaskBackend::Notion, TaskBackend::Jira];

    fn path(&self) -> &'static str {
        match self {
            TaskBackend::Notion => "notion/tasks",
            TaskBackend::Jira => "jira/issues",
        }
    }
}

impl fmt::Display for TaskBackend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskBackend::Notion => write!(f, "Notion"),
            TaskBackend::Jira => write!(f, "Jira"),
        }
    }
}

/// Outcome counts for one [`ComposioClient::push_tasks`] call.
///
/// Each task counts once per backend, so two tasks produce four deliveries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PushSummary {
    pub pushed: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
struct NotionTask<'a> {
    title: &'a str,
    description: &'a str,
    assignee: &'a str,
    priority: &'a str,
    status: &'static str,
}

impl<'a> From<&'a Task> for NotionTask<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            title: &task.title,
            description: &task.description,
            assignee: &task.assignee,
            priority: &task.priority,
            status: "todo",
        }
    }
}

#[derive(Debug, Serialize)]
struct JiraIssue<'a> {
    summary: &'a str,
    description: &'a str,
    assignee: &'a str,
    priority: &'static str,
}

impl<'a> From<&'a Task> for JiraIssue<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            summary: &task.title,
            description: &task.description,
            assignee: &task.assignee,
            priority: jira_priority(&task.priority),
        }
    }
}

/// Map a task priority onto Jira's priority names, ignoring case.
/// Anything unrecognized is `Medium`.
pub fn jira_priority(priority: &str) -> &'static str {
    match priority.to_lowercase().as_str() {
        "high" => "High",
        "low" => "Low",
        _ => "Medium",
    }
}

/// HTTP client for the Composio API.
pub struct ComposioClient {
    client: AuthenticatedClient,
    base_url: String,
}

impl ComposioClient {
    /// Build a client from the configured base URL and API key.
    ///
    /// Fails with a configuration error when no Composio API key is set.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let api_key = config.composio_api_key().ok_or_else(|| {
            warn!("Failed to build Composio client: COMPOSIO_API_KEY not set");
            Error {
                source: None,
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
            }
        })?;

        let auth = BearerTokenAuth::new(ApiKeyProvider::Composio, SecretString::new(api_key))?;
        let client = AuthenticatedClientBuilder::new()
            .with_auth(Box::new(auth))
            .with_timeout(TASK_PUSH_TIMEOUT)
            .with_user_agent(format!("transcript-relay/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.composio_base_url().to_string(),
        })
    }

    /// Deliver every task to every backend, one request at a time.
    pub async fn push_tasks(&self, tasks: &[Task]) -> PushSummary {
        let mut summary = PushSummary::default();

        if tasks.is_empty() {
            info!("No tasks to push");
            return summary;
        }

        for task in tasks {
            for backend in TaskBackend::ALL {
                match self.push_task(backend, task).await {
                    Ok(()) => {
                        debug!("Pushed task '{}' to {backend}", task.title);
                        summary.pushed += 1;
                    }
                    Err(e) => {
                        warn!("Failed to push task '{}' to {backend}: {e}", task.title);
                        summary.failed += 1;
                    }
                }
            }
        }

        info!(
            "Task push finished: {} delivered, {} failed",
            summary.pushed, summary.failed
        );
        summary
    }

    async fn push_task(&self, backend: TaskBackend, task: &Task) -> Result<(), Error> {
        let url = format!("{}/{}", self.base_url, backend.path());
        let request = self.client.post(&url);
        let request = match backend {
            TaskBackend::Notion => request.json(&NotionTask::from(task)),
            TaskBackend::Jira => request.json(&JiraIssue::from(task)),
        };

        let response = request.send().await?;

        // Only a plain 200 counts as delivered.
        match response.status() {
            StatusCode::OK => Ok(()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::task_push(format!("{backend} returned {status}: {body}")))
            }
        }
    }
}
