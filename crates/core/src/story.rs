//! Story descriptors
//!
//! The story registry lives outside this crate. It hands the store
//! descriptors carrying an id, argument type descriptors and the initial
//! arguments declared by the current implementation. The store only needs
//! read access, expressed by the traits below, so a host can pass its own
//! descriptor types without copying.

use crate::arg_types::ArgTypes;
use crate::types::{ArgSet, StoryId};
use serde::{Deserialize, Serialize};

/// Anything that names a story
pub trait StoryRef {
    /// The story's id
    fn story_id(&self) -> &StoryId;
}

/// A story descriptor exposing argument type descriptors
pub trait WithArgTypes: StoryRef {
    /// Argument name -> descriptor
    fn arg_types(&self) -> &ArgTypes;
}

/// A story descriptor exposing declared initial arguments
pub trait WithInitialArgs: StoryRef {
    /// Initial arguments declared by the implementation
    fn initial_args(&self) -> &ArgSet;
}

/// Full story descriptor as supplied by the registry
///
/// # Examples
///
/// ```
/// use storyargs_core::{ArgSet, Story};
///
/// let story = Story::new("button--primary").with_initial_args(ArgSet::new());
/// assert_eq!(story.id.as_str(), "button--primary");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Story id
    pub id: StoryId,
    /// Argument type descriptors
    #[serde(default)]
    pub arg_types: ArgTypes,
    /// Declared initial arguments
    #[serde(default)]
    pub initial_args: ArgSet,
}

impl Story {
    /// Story with no descriptors and no initial arguments
    pub fn new(id: impl Into<StoryId>) -> Self {
        Self {
            id: id.into(),
            arg_types: ArgTypes::new(),
            initial_args: ArgSet::new(),
        }
    }

    /// Replace the argument type descriptors
    pub fn with_arg_types(mut self, arg_types: ArgTypes) -> Self {
        self.arg_types = arg_types;
        self
    }

    /// Replace the initial arguments
    pub fn with_initial_args(mut self, initial_args: ArgSet) -> Self {
        self.initial_args = initial_args;
        self
    }
}

impl StoryRef for Story {
    fn story_id(&self) -> &StoryId {
        &self.id
    }
}

impl WithArgTypes for Story {
    fn arg_types(&self) -> &ArgTypes {
        &self.arg_types
    }
}

impl WithInitialArgs for Story {
    fn initial_args(&self) -> &ArgSet {
        &self.initial_args
    }
}
