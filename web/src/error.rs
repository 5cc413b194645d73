use std::error::Error as StdError;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{DomainErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind};

use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl Error {
    /// Turn a rejected JSON body (bad syntax, wrong field types, missing
    /// content type) into a 400 carrying the extractor's explanation.
    pub(crate) fn from_json_rejection(rejection: JsonRejection) -> Self {
        Self(DomainError::validation(rejection.body_text()))
    }
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// Only validation messages reach the client. Everything else is logged and
// answered with a fixed message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0.error_kind {
            DomainErrorKind::Internal(InternalErrorKind::Validation(message)) => {
                warn!("Rejecting request: {message}");
                (StatusCode::BAD_REQUEST, message.clone())
            }
            DomainErrorKind::Internal(internal_error_kind) => {
                error!("Internal error ({internal_error_kind:?}): {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            DomainErrorKind::External(external_error_kind) => {
                error!("Upstream error ({external_error_kind:?}): {}", self.0);
                let message = match external_error_kind {
                    ExternalErrorKind::UpstreamTimeout => "Upstream agent timed out",
                    _ => "Failed to process transcript",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: Error) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request_with_message() {
        let (status, body) =
            render(Error::from(DomainError::validation("Missing transcript in request"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing transcript in request"}));
    }

    #[tokio::test]
    async fn test_upstream_detail_is_not_leaked() {
        let err = Error::from(DomainError {
            source: Some("connection to secret-host:4111 refused".into()),
            error_kind: DomainErrorKind::External(ExternalErrorKind::UpstreamFailure),
        });
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to process transcript"}));
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let err = Error::from(DomainError {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        });
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Internal server error"}));
    }

    #[tokio::test]
    async fn test_timeout_has_its_own_message() {
        let err = Error::from(DomainError {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::UpstreamTimeout),
        });
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Upstream agent timed out"}));
    }
}
