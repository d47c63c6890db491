//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong at the network level without dictating
/// recovery strategy. Retrying is left to the caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The exchange did not complete within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The transport refused to build a request for the URL.
    ///
    /// Raised for URLs that parse but cannot be requested, such as
    /// non-HTTP schemes.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for [`SlackWebhook`](super::SlackWebhook) operations.
///
/// Each variant identifies the phase in which delivery failed.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The webhook URL could not be parsed.
    #[error("slackhook: invalid webhook URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL string
        url: String,
        /// Parser error message
        reason: String,
    },

    /// The message could not be serialized to JSON. No request was sent.
    #[error("slackhook: could not encode message: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The HTTP request could not be completed.
    #[error("slackhook: could not send HTTP request: {0}")]
    Transport(#[from] HttpError),

    /// The body of an erroneous response could not be read.
    #[error("slackhook: could not read HTTP response body: {0}")]
    ResponseRead(#[source] std::io::Error),

    /// Slack answered with a status other than 200.
    #[error("slackhook: received erroneous response (code: {}, body: {body})", status.as_u16())]
    Rejected {
        /// HTTP status code returned by Slack
        status: http::StatusCode,
        /// Response body, usually a short reason such as `invalid_payload`
        body: String,
    },
}

impl WebhookError {
    /// Returns the HTTP status if Slack rejected the message.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
