//! Thread-shareable argument store handle.
//!
//! [`ArgsStore`] has no internal locking. `SharedArgsStore` wraps one in a
//! reader-writer lock so a host with several threads (a preview server,
//! a file watcher that triggers resets) can hold cloned handles to the
//! same store. Each method takes the lock for exactly one store call, so
//! every call is atomic with respect to the others.

use crate::error::Result;
use crate::types::{ArgSet, PersistedArgs, StoreConfig, StoryId, WithArgTypes, WithInitialArgs};
use parking_lot::RwLock;
use std::sync::Arc;
use storyargs_primitives::ArgsStore;

/// Cloneable handle to a shared [`ArgsStore`].
///
/// # Example
///
/// ```
/// use storyargs::prelude::*;
///
/// let store = SharedArgsStore::new();
/// let handle = store.clone();
///
/// store.set_initial("id", &ArgSet::new());
/// assert!(handle.get("id")?.is_empty());
/// # Ok::<(), storyargs::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedArgsStore {
    inner: Arc<RwLock<ArgsStore>>,
}

impl SharedArgsStore {
    /// Create an empty shared store with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self::from_store(ArgsStore::with_config(config))
    }

    /// Share an existing store.
    pub fn from_store(store: ArgsStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Seed a story. Ignored if the story is already seeded.
    pub fn set_initial(&self, id: impl Into<StoryId>, initial_args: &ArgSet) {
        self.inner.write().set_initial(id, initial_args);
    }

    /// Current arguments for a story.
    pub fn get(&self, id: impl AsRef<str>) -> Result<ArgSet> {
        Ok(self.inner.read().get(id)?)
    }

    /// Initial arguments for a story.
    pub fn get_initial(&self, id: impl AsRef<str>) -> Result<ArgSet> {
        Ok(self.inner.read().get_initial(id)?)
    }

    /// Check if a story has been seeded.
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.inner.read().contains(id)
    }

    /// Shallow per-key update.
    pub fn update(&self, id: impl AsRef<str>, updated_args: &ArgSet) -> Result<()> {
        Ok(self.inner.write().update(id, updated_args)?)
    }

    /// Admit persisted values; see [`ArgsStore::update_from_persisted`].
    pub fn update_from_persisted(
        &self,
        story: &impl WithArgTypes,
        persisted: &PersistedArgs,
    ) -> Result<()> {
        Ok(self.inner.write().update_from_persisted(story, persisted)?)
    }

    /// Merge a typed delta; see [`ArgsStore::update_from_delta`].
    pub fn update_from_delta(&self, story: &impl WithArgTypes, delta: &ArgSet) -> Result<()> {
        Ok(self.inner.write().update_from_delta(story, delta)?)
    }

    /// Adopt regenerated defaults; see
    /// [`ArgsStore::reset_on_implementation_change`].
    pub fn reset_on_implementation_change(
        &self,
        new_story: &impl WithInitialArgs,
        previous_story: &impl WithInitialArgs,
    ) -> Result<()> {
        Ok(self
            .inner
            .write()
            .reset_on_implementation_change(new_story, previous_story)?)
    }

    /// Restore all or the named args to their initial values.
    pub fn reset_args(&self, id: impl AsRef<str>, names: Option<&[&str]>) -> Result<()> {
        Ok(self.inner.write().reset_args(id, names)?)
    }

    /// Forget a story. Returns `true` if it was seeded.
    pub fn remove(&self, id: impl AsRef<str>) -> bool {
        self.inner.write().remove(id)
    }

    /// Run `f` with shared read access to the whole store.
    pub fn with_store<R>(&self, f: impl FnOnce(&ArgsStore) -> R) -> R {
        f(&self.inner.read())
    }
}
