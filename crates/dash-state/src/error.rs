//! Error types for the state containers.

use thiserror::Error;

/// Errors raised by state container writes.
///
/// Soft issues (duplicate tab ids, removing an absent file, filtered file
/// records) are not errors; they surface as `bool` returns or advisory
/// messages instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StateError {
    /// The candidate snapshot violates an aggregate invariant even after
    /// correction. No state was changed.
    #[error("invalid snapshot: {}", .messages.join("; "))]
    InvalidSnapshot {
        /// One message per violated invariant.
        messages: Vec<String>,
    },

    /// A tab candidate failed validation.
    #[error("invalid tab entry: {id}")]
    InvalidTab {
        /// Identifier as given, or empty if there was none.
        id: String,
    },

    /// A typed snapshot could not be converted for validation.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StateError {
    /// Message suitable for the dashboard error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidSnapshot { messages } => {
                format!("Storage data was rejected: {}", messages.join("; "))
            }
            Self::InvalidTab { id } if id.is_empty() => "A tab could not be added.".to_string(),
            Self::InvalidTab { id } => format!("Tab \"{id}\" could not be added."),
            Self::Encode(_) => "An unexpected error occurred.".to_string(),
        }
    }
}

/// Result type alias for state operations.
pub type Result<T> = std::result::Result<T, StateError>;
