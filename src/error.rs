//! Error types for the contact relay.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while processing a contact submission.
///
/// Every variant collapses into the same generic failure response at the
/// HTTP boundary; the detail is only ever logged.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Request body is not parseable as JSON
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// Payload parsed but violates a field constraint
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Outbound webhook call failed before a response arrived
    #[error("Forwarding failed: {0}")]
    Forwarding(#[from] WebhookError),
}

impl SubmissionError {
    /// Short machine-friendly label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedPayload(_) => "malformed_payload",
            Self::Validation(_) => "validation_error",
            Self::Forwarding(_) => "forwarding_error",
        }
    }

    /// Submission field the failure concerns, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(e) => e.field(),
            _ => None,
        }
    }
}

/// Errors that can occur when calling the CRM webhook.
///
/// An HTTP status from the webhook is never one of these: the response is
/// not inspected.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// Transport-level failure (DNS, connect, reset, TLS, protocol)
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Failed to serialize the outbound body
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The blocking task running the request did not complete
    #[error("Task join error: {0}")]
    TaskJoin(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Convenience type alias for Results with WebhookError
pub type WebhookResult<T> = Result<T, WebhookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
