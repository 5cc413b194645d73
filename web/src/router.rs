use crate::controller::{
    health_check_controller, meeting_analysis_controller, smart_assistant_controller,
    webhook_controller,
};
use crate::{params, AppState};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use log::*;
use service::config::Config;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI document. To be a part
// of the rendered document, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Transcript Relay API"
        ),
        paths(
            health_check_controller::health_check,
            webhook_controller::vapi_webhook,
            smart_assistant_controller::smart_assistant,
            meeting_analysis_controller::meeting_analysis,
        ),
        components(
            schemas(
                domain::BasicInsights,
                domain::AssistantInsights,
                domain::MeetingAnalysis,
                domain::TimeOptimization,
                domain::Task,
                params::transcript::WebhookParams,
                params::smart_assistant::SmartAssistantParams,
                params::meeting_analysis::MeetingAnalysisParams,
            )
        ),
        tags(
            (name = "transcript_relay", description = "Meeting transcript analysis relay API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    let cors = cors_layer(app_state.config_ref());

    Router::new()
        .merge(health_routes())
        .merge(transcript_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .layer(cors)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn transcript_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/vapi-webhook", post(webhook_controller::vapi_webhook))
        .route(
            "/smart-assistant",
            post(smart_assistant_controller::smart_assistant),
        )
        .route(
            "/meeting-analysis",
            post(meeting_analysis_controller::meeting_analysis),
        )
        .with_state(app_state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}
