use crate::params::meeting_analysis::MeetingAnalysisParams;
use crate::params::require_transcript;
use crate::{AppState, Error};

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use domain::gateway::mastra::MastraClient;
use domain::transcript as TranscriptApi;
use log::*;

/// POST analyze a finished meeting
///
/// Action items found in the analysis are forwarded to Notion and Jira when a
/// Composio API key is configured.
#[utoipa::path(
    post,
    path = "/meeting-analysis",
    request_body = MeetingAnalysisParams,
    responses(
        (status = 200, description = "Executive summary, action items, decisions and efficiency score", body = domain::MeetingAnalysis),
        (status = 400, description = "Missing transcript or malformed body"),
        (status = 500, description = "The upstream agent failed or timed out"),
    )
)]
pub async fn meeting_analysis(
    State(app_state): State<AppState>,
    params: Result<Json<MeetingAnalysisParams>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(params) = params.map_err(Error::from_json_rejection)?;
    let transcript = require_transcript(params.transcript)?;
    let goals = params.goals.unwrap_or_default();
    let decisions = params.decisions.unwrap_or_default();
    debug!(
        "POST /meeting-analysis with {} goals, {} decisions",
        goals.len(),
        decisions.len()
    );

    let config = app_state.config_ref();
    let provider = MastraClient::new(config)?;
    let insights = TranscriptApi::process_meeting_analysis(
        config,
        &provider,
        &transcript,
        &goals,
        &decisions,
    )
    .await?;

    Ok((StatusCode::OK, Json(insights)))
}
