//! Order submission errors.

use thiserror::Error;

use crate::client::ApiError;

/// Fallback shown when the service rejects an order without saying why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to create order";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The order service could not be reached.
    #[error("order service unreachable: {0}")]
    Unreachable(String),

    /// The service answered but refused the order. `message` is shown to the
    /// customer as-is.
    #[error("{message}")]
    Rejected {
        /// Message for the customer
        message: String,
    },

    /// The exchange failed for some other reason.
    #[error("order submission failed: {0}")]
    Transport(String),
}

impl From<ApiError> for SubmissionError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Unreachable(source) => Self::Unreachable(source.to_string()),
            ApiError::Status { status, message } => Self::Rejected {
                message: message.unwrap_or_else(|| format!("Server error: {}", status.as_u16())),
            },
            error @ (ApiError::Http(_) | ApiError::Decode(_)) => {
                Self::Transport(error.to_string())
            }
        }
    }
}
