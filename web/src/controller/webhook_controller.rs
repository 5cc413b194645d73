//! Controller for the voice-agent transcript webhook.

use crate::params::require_transcript;
use crate::params::transcript::WebhookParams;
use crate::{AppState, Error};

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use domain::gateway::mastra::MastraClient;
use domain::transcript::{self as TranscriptApi, RequestType};
use log::*;

/// POST /vapi-webhook
///
/// Analyze a transcript with the agent selected by `request_type` and return
/// the agent text with the suggestions found in it.
#[utoipa::path(
    post,
    path = "/vapi-webhook",
    request_body = WebhookParams,
    responses(
        (status = 200, description = "Transcript analyzed", body = domain::BasicInsights),
        (status = 400, description = "Missing transcript, malformed body or unknown request_type"),
        (status = 500, description = "The upstream agent failed or timed out"),
    )
)]
pub async fn vapi_webhook(
    State(app_state): State<AppState>,
    params: Result<Json<WebhookParams>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(params) = params.map_err(Error::from_json_rejection)?;
    let transcript = require_transcript(params.transcript)?;

    let request_type = params
        .request_type
        .as_deref()
        .map(str::parse::<RequestType>)
        .transpose()?
        .unwrap_or_default();
    debug!("POST /vapi-webhook as {request_type}");

    let config = app_state.config_ref();
    let provider = MastraClient::new(config)?;
    let insights =
        TranscriptApi::process_transcript(config, &provider, &transcript, request_type).await?;

    Ok((StatusCode::OK, Json(insights)))
}
