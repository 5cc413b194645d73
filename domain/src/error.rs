//! Error types for the `domain` layer.
use meeting_auth::error::{Error as MeetingAuthError, ErrorKind as MeetingAuthErrorKind, HttpErrorKind};
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. `web` maps the kinds onto HTTP status codes and never sees
/// `meeting-ai`, `meeting-auth` or `reqwest` errors directly.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// The caller sent a request the relay cannot act on. The message is safe to return.
    Validation(String),
    Config,
    Other(String),
}

/// Enum representing the various kinds of errors caused by third-party services.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    UpstreamFailure,
    UpstreamTimeout,
    MalformedResponse,
    /// A task could not be delivered to a project-management tool. Only ever logged.
    TaskPush,
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Validation(message.into())),
        }
    }

    pub fn task_push(message: impl Into<String>) -> Self {
        Error {
            source: Some(message.into().into()),
            error_kind: DomainErrorKind::External(ExternalErrorKind::TaskPush),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "Domain Error: {:?}: {}", self.error_kind, source),
            None => write!(f, "Domain Error: {:?}", self.error_kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `meeting-ai` layer to the `domain` layer.
impl From<meeting_ai::Error> for Error {
    fn from(err: meeting_ai::Error) -> Self {
        let error_kind = match &err {
            meeting_ai::Error::Validation(message) => {
                DomainErrorKind::Internal(InternalErrorKind::Validation(message.clone()))
            }
            meeting_ai::Error::UpstreamFailure(_) => {
                DomainErrorKind::External(ExternalErrorKind::UpstreamFailure)
            }
            meeting_ai::Error::UpstreamTimeout(_) => {
                DomainErrorKind::External(ExternalErrorKind::UpstreamTimeout)
            }
            meeting_ai::Error::MalformedResponse(_) => {
                DomainErrorKind::External(ExternalErrorKind::MalformedResponse)
            }
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<MeetingAuthError> for Error {
    fn from(err: MeetingAuthError) -> Self {
        let error_kind = match &err.error_kind {
            MeetingAuthErrorKind::ApiKey(_) => DomainErrorKind::Internal(InternalErrorKind::Config),
            MeetingAuthErrorKind::Http(HttpErrorKind::BuilderFailed) => DomainErrorKind::Internal(
                InternalErrorKind::Other("Failed to build HTTP client".to_string()),
            ),
            MeetingAuthErrorKind::Http(HttpErrorKind::Timeout) => {
                DomainErrorKind::External(ExternalErrorKind::UpstreamTimeout)
            }
            MeetingAuthErrorKind::Http(_) => {
                DomainErrorKind::External(ExternalErrorKind::UpstreamFailure)
            }
        };
        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors that result from issues building the reqwest::Client instance. This
        // type of error will occur prior to any network calls being made.
        let error_kind = if err.is_builder() {
            DomainErrorKind::Internal(InternalErrorKind::Other(
                "Failed to build reqwest client".to_string(),
            ))
        } else if err.is_timeout() {
            DomainErrorKind::External(ExternalErrorKind::UpstreamTimeout)
        } else if err.is_decode() {
            DomainErrorKind::External(ExternalErrorKind::MalformedResponse)
        } else {
            DomainErrorKind::External(ExternalErrorKind::UpstreamFailure)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                "JSON encoding related error".to_string(),
            )),
        }
    }
}
