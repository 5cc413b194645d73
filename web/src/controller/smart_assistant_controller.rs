use crate::params::require_transcript;
use crate::params::smart_assistant::SmartAssistantParams;
use crate::{AppState, Error};

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use domain::gateway::mastra::MastraClient;
use domain::transcript as TranscriptApi;
use serde_json::json;

/// POST live suggestions for a meeting in progress
#[utoipa::path(
    post,
    path = "/smart-assistant",
    request_body = SmartAssistantParams,
    responses(
        (status = 200, description = "Suggestions, insights and drift signal for the current goal", body = domain::AssistantInsights),
        (status = 400, description = "Missing transcript or malformed body"),
        (status = 500, description = "The upstream agent failed or timed out"),
    )
)]
pub async fn smart_assistant(
    State(app_state): State<AppState>,
    params: Result<Json<SmartAssistantParams>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(params) = params.map_err(Error::from_json_rejection)?;
    let transcript = require_transcript(params.transcript)?;
    let current_goal = params.current_goal.unwrap_or_default();
    let meeting_context = params.meeting_context.unwrap_or_else(|| json!({}));

    let config = app_state.config_ref();
    let provider = MastraClient::new(config)?;
    let insights = TranscriptApi::process_smart_assistant(
        config,
        &provider,
        &transcript,
        &current_goal,
        &meeting_context,
    )
    .await?;

    Ok((StatusCode::OK, Json(insights)))
}
