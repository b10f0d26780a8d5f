//! Core types for the argument store
//!
//! This module defines the fundamental types used throughout the system:
//! - [`StoryId`]: Opaque identifier for one configurable story
//! - [`ArgSet`]: Named argument values for one story

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Argument name -> value, iterated in name order.
pub type ArgSet = BTreeMap<String, Value>;

/// Unique identifier for a story
///
/// Story ids are opaque: the store never parses them, it only uses them
/// as table keys and in error messages.
///
/// # Examples
///
/// ```
/// use storyargs_core::StoryId;
///
/// let id = StoryId::from("button--primary");
/// assert_eq!(id.as_str(), "button--primary");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    /// Create a story id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        StoryId(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StoryId {
    fn from(id: &str) -> Self {
        StoryId(id.to_string())
    }
}

impl From<String> for StoryId {
    fn from(id: String) -> Self {
        StoryId(id)
    }
}

impl From<&StoryId> for StoryId {
    fn from(id: &StoryId) -> Self {
        id.clone()
    }
}

// Lets `FxHashMap<StoryId, _>` be queried with a plain `&str`.
impl Borrow<str> for StoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
