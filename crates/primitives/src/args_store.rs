//! ArgsStore: per-story argument state
//!
//! ## Design
//!
//! One table keyed by story id. Each entry holds the initial arguments
//! declared by the story's implementation and the current arguments the
//! store presents to readers. Keeping both sets in one entry means a story
//! has either both or neither.
//!
//! ## Operations
//!
//! - **Seeding**: `set_initial` is write-once per story id
//! - **Reads**: `get` / `get_initial` return owned copies
//! - **Updates**: `update` replaces whole values per key
//! - **Persisted state**: `update_from_persisted` coerces, filters and
//!   structurally merges untrusted values
//! - **Implementation change**: `reset_on_implementation_change` adopts
//!   new defaults while keeping user edits
//!
//! ## Thread Safety
//!
//! No internal locking. The store is `Send + Sync`; callers sharing it
//! across threads must serialize access themselves.

use crate::coerce::map_args_to_types;
use crate::combine::combine;
use crate::config::{StoreBuilder, StoreConfig};
use crate::delta::{apply_delta, diff_args};
use crate::options::validate_options;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use storyargs_core::{
    ArgSet, ArgsError, PersistedArgs, PersistedValue, Result, StoryId, WithArgTypes,
    WithInitialArgs,
};
use tracing::debug;

/// Initial and current arguments of one story
#[derive(Debug, Clone, PartialEq)]
struct StoryArgs {
    initial: ArgSet,
    current: ArgSet,
}

/// In-memory argument store
///
/// # Example
///
/// ```
/// use storyargs_core::{ArgSet, Value};
/// use storyargs_primitives::ArgsStore;
///
/// let mut store = ArgsStore::new();
///
/// let mut initial = ArgSet::new();
/// initial.insert("label".into(), Value::from("Button"));
/// store.set_initial("button--primary", &initial);
///
/// let mut edit = ArgSet::new();
/// edit.insert("label".into(), Value::from("Click me"));
/// store.update("button--primary", &edit)?;
///
/// assert_eq!(store.get("button--primary")?["label"], Value::from("Click me"));
/// # Ok::<(), storyargs_core::ArgsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgsStore {
    stories: FxHashMap<StoryId, StoryArgs>,
    config: StoreConfig,
}

impl ArgsStore {
    /// Create an empty store with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            stories: FxHashMap::default(),
            config,
        }
    }

    /// Create a builder for store configuration
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Active configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ========================================================================
    // Seeding and reads
    // ========================================================================

    /// Seed a story's initial and current arguments.
    ///
    /// The first call for an id is authoritative; later calls for the same
    /// id are ignored.
    pub fn set_initial(&mut self, id: impl Into<StoryId>, initial_args: &ArgSet) {
        if let Entry::Vacant(slot) = self.stories.entry(id.into()) {
            debug!(story = %slot.key(), args = initial_args.len(), "seeding initial args");
            slot.insert(StoryArgs {
                initial: initial_args.clone(),
                current: initial_args.clone(),
            });
        }
    }

    /// Current arguments for a story.
    ///
    /// # Errors
    ///
    /// `NotFound` if the story was never seeded.
    pub fn get(&self, id: impl AsRef<str>) -> Result<ArgSet> {
        self.entry(id.as_ref()).map(|entry| entry.current.clone())
    }

    /// Initial arguments the store currently holds for a story.
    ///
    /// # Errors
    ///
    /// `NotFound` if the story was never seeded.
    pub fn get_initial(&self, id: impl AsRef<str>) -> Result<ArgSet> {
        self.entry(id.as_ref()).map(|entry| entry.initial.clone())
    }

    /// Check if a story has been seeded
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.stories.contains_key(id.as_ref())
    }

    /// Ids of all seeded stories, sorted
    pub fn story_ids(&self) -> Vec<StoryId> {
        let mut ids: Vec<StoryId> = self.stories.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of seeded stories
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Check if no story has been seeded
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Forget a story entirely. Returns `true` if it was seeded.
    ///
    /// A later `set_initial` for the same id seeds it afresh.
    pub fn remove(&mut self, id: impl AsRef<str>) -> bool {
        self.stories.remove(id.as_ref()).is_some()
    }

    // ========================================================================
    // Updates
    // ========================================================================

    /// Replace the current value of every key in `updated_args`.
    ///
    /// Values are replaced wholesale; nested objects and arrays are not
    /// merged. Keys not mentioned keep their values.
    ///
    /// # Errors
    ///
    /// `NotFound` if the story was never seeded.
    pub fn update(&mut self, id: impl AsRef<str>, updated_args: &ArgSet) -> Result<()> {
        let entry = self.entry_mut(id.as_ref())?;
        for (name, value) in updated_args {
            entry.current.insert(name.clone(), value.clone());
        }
        Ok(())
    }

    /// Admit externally persisted values.
    ///
    /// Each value is coerced to its declared shape, checked against its
    /// options allow-list and structurally merged onto the current value.
    /// Keys without a descriptor, incompatible values and values outside
    /// their options are dropped silently.
    ///
    /// # Errors
    ///
    /// `NotFound` if the story was never seeded.
    pub fn update_from_persisted(
        &mut self,
        story: &impl WithArgTypes,
        persisted: &PersistedArgs,
    ) -> Result<()> {
        let id = story.story_id();
        self.entry(id.as_str())?;
        let mapped = map_args_to_types(id, persisted, story.arg_types());
        self.merge_validated(story, mapped)
    }

    /// Merge a delta of already-typed values.
    ///
    /// Like [`update_from_persisted`](Self::update_from_persisted) without
    /// the coercion step: options are still enforced and objects and
    /// arrays are merged structurally.
    ///
    /// # Errors
    ///
    /// `NotFound` if the story was never seeded.
    pub fn update_from_delta(&mut self, story: &impl WithArgTypes, delta: &ArgSet) -> Result<()> {
        let delta: PersistedArgs = delta
            .iter()
            .map(|(name, value)| (name.clone(), PersistedValue::from(value.clone())))
            .collect();
        self.merge_validated(story, delta)
    }

    fn merge_validated(&mut self, story: &impl WithArgTypes, args: PersistedArgs) -> Result<()> {
        let id = story.story_id();
        let validated = validate_options(id, args, story.arg_types(), &self.config);
        let config = self.config.clone();
        let entry = self.entry_mut(id.as_str())?;

        let merged: ArgSet = validated
            .iter()
            .map(|(name, value)| (name.clone(), combine(entry.current.get(name), value, &config)))
            .collect();
        entry.current.extend(merged);
        Ok(())
    }

    // ========================================================================
    // Resets
    // ========================================================================

    /// Adopt regenerated initial arguments while keeping user edits.
    ///
    /// Keys whose current value differs from `previous_story`'s declared
    /// initial value are user edits and keep their current value. Every
    /// other key takes its value from `new_story`'s initial arguments, or
    /// disappears if the new defaults no longer declare it.
    ///
    /// # Errors
    ///
    /// - `StoryMismatch` if the two descriptors name different stories
    /// - `NotFound` if the story was never seeded
    pub fn reset_on_implementation_change(
        &mut self,
        new_story: &impl WithInitialArgs,
        previous_story: &impl WithInitialArgs,
    ) -> Result<()> {
        let id = new_story.story_id();
        if previous_story.story_id() != id {
            return Err(ArgsError::StoryMismatch {
                expected: id.clone(),
                actual: previous_story.story_id().clone(),
            });
        }

        let entry = self.entry_mut(id.as_str())?;
        let delta = diff_args(previous_story.initial_args(), &entry.current);
        entry.current = apply_delta(new_story.initial_args(), &delta);
        entry.initial = new_story.initial_args().clone();

        debug!(story = %id, kept = delta.len(), "reset args on implementation change");
        Ok(())
    }

    /// Restore arguments to the initial values the store holds.
    ///
    /// With `names`, only those arguments are restored; a named argument
    /// with no initial value is removed. Without, the whole current set is
    /// replaced by a copy of the initial set.
    ///
    /// # Errors
    ///
    /// `NotFound` if the story was never seeded.
    pub fn reset_args(&mut self, id: impl AsRef<str>, names: Option<&[&str]>) -> Result<()> {
        let entry = self.entry_mut(id.as_ref())?;
        match names {
            None => entry.current = entry.initial.clone(),
            Some(names) => {
                for name in names {
                    match entry.initial.get(*name) {
                        Some(value) => {
                            entry.current.insert((*name).to_string(), value.clone());
                        }
                        None => {
                            entry.current.remove(*name);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn entry(&self, id: &str) -> Result<&StoryArgs> {
        self.stories.get(id).ok_or_else(|| ArgsError::not_found(id))
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut StoryArgs> {
        self.stories
            .get_mut(id)
            .ok_or_else(|| ArgsError::not_found(id))
    }
}
