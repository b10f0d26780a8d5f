//! Core types for storyargs
//!
//! This crate defines the value model shared by the argument store:
//! - [`Value`]: JSON-like argument value with structural equality
//! - [`StoryId`] and [`ArgSet`]: story identity and named arguments
//! - [`ArgType`] and [`ArgShape`]: argument type descriptors
//! - [`PersistedValue`]: untrusted, possibly sparse input values
//! - [`Story`] and the descriptor traits consumed by the store
//! - [`ArgsError`]: store error type

#![warn(missing_docs)]

pub mod arg_types;
pub mod error;
pub mod persisted;
pub mod story;
pub mod types;
pub mod value;

pub use arg_types::{ArgShape, ArgType, ArgTypes};
pub use error::{ArgsError, Result};
pub use persisted::{PersistedArgs, PersistedValue};
pub use story::{Story, StoryRef, WithArgTypes, WithInitialArgs};
pub use types::{ArgSet, StoryId};
pub use value::Value;
