//! Convenient imports for storyargs.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use storyargs::prelude::*;
//!
//! let mut store = ArgsStore::new();
//! store.set_initial("id", &args_from_json(json!({"a": "1"}))?);
//! # Ok::<(), storyargs::Error>(())
//! ```

// Main entry points
pub use crate::shared::SharedArgsStore;
pub use storyargs_primitives::{ArgsStore, StoreBuilder, StoreConfig};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{
    ArgSet, ArgShape, ArgType, ArgTypes, PersistedArgs, PersistedValue, Story, StoryId, Value,
};

// Descriptor traits
pub use crate::types::{StoryRef, WithArgTypes, WithInitialArgs};

// JSON helpers
pub use crate::types::{args_from_json, persisted_from_json};

// Re-export serde_json for convenience
pub use serde_json::json;
