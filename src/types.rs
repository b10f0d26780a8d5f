//! Public types for the storyargs API.
//!
//! This module re-exports types from internal crates with a clean public
//! interface, plus JSON decoding helpers for hosts that receive argument
//! sets as JSON text.

pub use storyargs_core::{
    ArgSet, ArgShape, ArgType, ArgTypes, PersistedArgs, PersistedValue, Story, StoryId,
    StoryRef, Value, WithArgTypes, WithInitialArgs,
};
pub use storyargs_primitives::{ArgDelta, StoreConfig};

use crate::error::{Error, Result};

/// Decode an argument set from a JSON object.
///
/// # Errors
///
/// `Serialization` if `json` is not an object.
pub fn args_from_json(json: serde_json::Value) -> Result<ArgSet> {
    match Value::from(json) {
        Value::Object(args) => Ok(args),
        other => Err(Error::Serialization(format!(
            "expected an object of args, got {}",
            other.type_name()
        ))),
    }
}

/// Parse persisted arguments from JSON text.
///
/// `null` array positions are read as holes.
///
/// # Errors
///
/// `Serialization` if the text is not a JSON object.
pub fn persisted_from_json(text: &str) -> Result<PersistedArgs> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    match PersistedValue::from(json) {
        PersistedValue::Object(args) => Ok(args),
        other => Err(Error::Serialization(format!(
            "expected an object of persisted args, got {}",
            other.type_name()
        ))),
    }
}
