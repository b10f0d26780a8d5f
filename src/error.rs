//! Unified error types for storyargs.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use storyargs_core::ArgsError;
use thiserror::Error;

/// All storyargs errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No argument state is known for a story
    #[error("not found: {0}")]
    NotFound(String),

    /// Descriptors disagree about which story an operation targets
    #[error("conflict: {0}")]
    Conflict(String),

    /// Input could not be decoded
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for storyargs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }
}

// Convert from store errors; the message keeps the store's wording.
impl From<ArgsError> for Error {
    fn from(e: ArgsError) -> Self {
        match e {
            ArgsError::NotFound { .. } => Error::NotFound(e.to_string()),
            ArgsError::StoryMismatch { .. } => Error::Conflict(e.to_string()),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
