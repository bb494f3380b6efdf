//! Error Types

use thiserror::Error;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Session error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// No session has been recorded under this identifier
    #[error("Session not found: {0}")]
    SessionNotFound(String),
}

impl CoreError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            CoreError::SessionNotFound(id) => {
                format!("No conversation exists for session '{id}'.")
            }
        }
    }
}
