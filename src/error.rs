//! Error types surfaced by the notifier pipeline.

use thiserror::Error;

/// Errors that terminate a notification run.
///
/// Every variant is terminal: nothing is retried and the display text is what
/// gets recorded as the workflow failure reason.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotifyError {
    /// A required input was missing or failed validation.
    #[error("{message}")]
    InvalidConfig {
        /// Description naming the offending input.
        message: String,
    },

    /// The triggering event payload could not be read.
    #[error("event payload error: {message}")]
    Event {
        /// Details about the read or decode failure.
        message: String,
    },

    /// Posting the message to Chatwork failed.
    #[error("Chatwork delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    /// Publishing a step output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl NotifyError {
    /// Builds an [`NotifyError::InvalidConfig`] from any message.
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Failures of the single outbound Chatwork request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// Chatwork answered with a status other than 200.
    #[error("Chatwork API responded with status {status}: {body}")]
    Status {
        /// HTTP status code returned by the API.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// The request never produced a response.
    #[error("network error talking to Chatwork: {message}")]
    Transport {
        /// Transport-level error detail.
        message: String,
    },

    /// The success response did not carry a readable message id.
    #[error("Chatwork response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },
}
