//! Mastra agent API client.
//!
//! Sends a prompt to a named agent with `POST {base}/agents/{agent_id}/query`
//! and hands the agent's free-text `output` back to the insight engine.

use crate::error::Error;
use async_trait::async_trait;
use log::*;
use meeting_ai::traits::agent::Provider;
use meeting_ai::types::agent::{Request, Response};
use meeting_auth::api_key::{ApiKeyProvider, BearerTokenAuth};
use meeting_auth::http::{AuthenticatedClient, AuthenticatedClientBuilder};
use secrecy::SecretString;
use service::config::Config;
use std::time::Duration;

/// Maximum time allowed for one agent query, including reading the response body.
pub const AGENT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Mastra agent API.
pub struct MastraClient {
    client: AuthenticatedClient,
    base_url: String,
}

impl MastraClient {
    /// Build a client from the configured base URL and optional API key.
    pub fn new(config: &Config) -> Result<Self, Error> {
        Self::with_timeout(config, AGENT_TIMEOUT)
    }

    pub(crate) fn with_timeout(config: &Config, timeout: Duration) -> Result<Self, Error> {
        let mut builder = AuthenticatedClientBuilder::new()
            .with_timeout(timeout)
            .with_user_agent(format!("transcript-relay/{}", env!("CARGO_PKG_VERSION")));

        match config.mastra_api_key() {
            Some(api_key) => {
                let auth = BearerTokenAuth::new(ApiKeyProvider::Mastra, SecretString::new(api_key))?;
                builder = builder.with_auth(Box::new(auth));
            }
            None => debug!("No Mastra API key configured, agent queries are sent without credentials"),
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.mastra_base_url().to_string(),
        })
    }

    fn query_url(&self, agent_id: &str) -> String {
        format!("{}/agents/{}/query", self.base_url, agent_id)
    }
}

#[async_trait]
impl Provider for MastraClient {
    async fn query(&self, agent_id: &str, input: &str) -> Result<Response, meeting_ai::Error> {
        let url = self.query_url(agent_id);
        debug!("Querying Mastra agent {agent_id} at {url}");

        let request = Request {
            input: input.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(agent_id, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Mastra agent {agent_id} returned {status}: {body}");
            return Err(meeting_ai::Error::UpstreamFailure(format!(
                "agent {agent_id} returned {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(agent_id, e))?;

        let response: Response = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse Mastra agent {agent_id} response: {e:?}");
            meeting_ai::Error::MalformedResponse(e.to_string())
        })?;

        info!("Successfully queried Mastra agent {agent_id}");
        Ok(response)
    }
}

fn transport_error(agent_id: &str, err: reqwest::Error) -> meeting_ai::Error {
    if err.is_timeout() {
        warn!("Mastra agent {agent_id} timed out: {err:?}");
        meeting_ai::Error::UpstreamTimeout(format!("agent {agent_id} timed out"))
    } else {
        warn!("Failed to reach Mastra agent {agent_id}: {err:?}");
        meeting_ai::Error::UpstreamFailure(err.to_string())
    }
}
