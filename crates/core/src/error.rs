//! Error types for the argument store
//!
//! Only two conditions are errors: addressing a story the store has never
//! seen, and handing a reset two descriptors for different stories.
//! Values that fail coercion or an options allow-list are dropped, not
//! reported here.

use crate::types::StoryId;
use thiserror::Error;

/// Argument store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// No argument state is known for this story
    #[error("no args known for story `{id}`; has it been rendered yet?")]
    NotFound {
        /// The unseeded story id
        id: StoryId,
    },

    /// Previous and new story descriptors name different stories
    #[error("story mismatch: expected `{expected}`, got `{actual}`")]
    StoryMismatch {
        /// Id of the new story
        expected: StoryId,
        /// Id of the previous story
        actual: StoryId,
    },
}

impl ArgsError {
    /// Not-found error for `id`
    pub fn not_found(id: impl Into<StoryId>) -> Self {
        ArgsError::NotFound { id: id.into() }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ArgsError::NotFound { .. })
    }
}

/// Result type for argument store operations
pub type Result<T> = std::result::Result<T, ArgsError>;
