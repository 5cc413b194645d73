use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /vapi-webhook`.
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = params::transcript::WebhookParams)]
pub(crate) struct WebhookParams {
    pub(crate) transcript: Option<String>,
    /// One of `engineering_discussion_analysis` (default), `smart_assistant_insights`
    /// or `comprehensive_meeting_analysis`.
    pub(crate) request_type: Option<String>,
}
