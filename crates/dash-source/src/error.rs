//! Error types for data sources.

use dash_state::StateError;
use thiserror::Error;

/// Errors that can occur while loading storage data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The request could not be sent or the response not read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The payload was rejected by the storage state.
    #[error(transparent)]
    Rejected(#[from] StateError),
}

impl SourceError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { .. } => self.to_string(),
            Self::Network(_) => {
                "Could not reach the storage service. Please check your connection.".to_string()
            }
            Self::Decode(_) => "The storage service returned malformed data.".to_string(),
            Self::Rejected(error) => error.user_message(),
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status } => *status >= 500 || *status == 429,
            Self::Decode(_) | Self::Rejected(_) => false,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
