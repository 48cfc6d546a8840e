//! Custom error types for milestone creation.

use reqwest::StatusCode;
use thiserror::Error;

use crate::github::transport::TransportError;

/// Main error type for milestone operations.
#[derive(Error, Debug)]
pub enum MilestoneError {
    // Value errors
    #[error("Repository not configured")]
    RepositoryNotConfigured,

    #[error("Invalid repository name \"{0}\": expected owner/name")]
    InvalidRepositoryName(String),

    #[error("Invalid semantic version \"{input}\": {reason}")]
    InvalidSemVerVersion { input: String, reason: String },

    // Credential errors
    #[error("API token must not be empty")]
    EmptyApiToken,

    #[error("Invalid API token: {0}")]
    InvalidApiToken(String),

    // Request building errors
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Cannot build API endpoint from {0}")]
    InvalidEndpoint(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    // Classified API failures
    #[error(transparent)]
    CreateMilestoneFailed(#[from] CreateMilestoneFailed),

    // Transport failures are carried exactly as the transport reported them
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type alias using MilestoneError
pub type Result<T> = std::result::Result<T, MilestoneError>;

impl MilestoneError {
    /// Create an invalid semantic version error
    pub fn invalid_version(
        input: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidSemVerVersion {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true when the platform reported the milestone as a duplicate.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::CreateMilestoneFailed(failed) if failed.is_already_exists())
    }
}

// Header values reject control characters, which a pasted token can carry
impl From<reqwest::header::InvalidHeaderValue> for MilestoneError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::InvalidApiToken(format!("Invalid header value: {}", err))
    }
}

/// Why the platform refused or garbled a create-milestone call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// 201 whose body carried no usable `html_url`.
    UnexpectedSuccessPayload,
    /// 422 reporting a milestone with the same title.
    AlreadyExists,
    /// Any other status, including 422 bodies of an unknown shape.
    UnexpectedStatus,
}

impl FailureReason {
    /// Machine readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::UnexpectedSuccessPayload => {
                "unexpected_success_payload"
            }
            FailureReason::AlreadyExists => "already_exists",
            FailureReason::UnexpectedStatus => "unexpected_status",
        }
    }
}

/// Classified failure of a create-milestone call. Always carries the raw
/// status and body so the call never has to be repeated to diagnose it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.message())]
pub struct CreateMilestoneFailed {
    reason: FailureReason,
    status: StatusCode,
    body: String,
}

impl CreateMilestoneFailed {
    pub fn unexpected_success_payload(body: impl Into<String>) -> Self {
        Self {
            reason: FailureReason::UnexpectedSuccessPayload,
            status: StatusCode::CREATED,
            body: body.into(),
        }
    }

    pub fn already_exists(body: impl Into<String>) -> Self {
        Self {
            reason: FailureReason::AlreadyExists,
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: body.into(),
        }
    }

    pub fn unexpected_status(
        status: StatusCode,
        body: impl Into<String>,
    ) -> Self {
        Self {
            reason: FailureReason::UnexpectedStatus,
            status,
            body: body.into(),
        }
    }

    pub fn reason(&self) -> FailureReason {
        self.reason
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_already_exists(&self) -> bool {
        self.reason == FailureReason::AlreadyExists
    }

    fn message(&self) -> String {
        match self.reason {
            FailureReason::UnexpectedSuccessPayload => {
                "unexpected success payload".to_string()
            }
            FailureReason::AlreadyExists => "already_exists".to_string(),
            FailureReason::UnexpectedStatus => format!(
                "unexpected status {}: {}",
                self.status.as_u16(),
                self.body
            ),
        }
    }
}
