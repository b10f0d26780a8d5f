//! Store configuration
//!
//! Configuration never changes what a reconciliation keeps or drops for
//! the keys it is asked about; it only tunes reporting and the shape of
//! merged sparse arrays.

use crate::args_store::ArgsStore;
use serde::{Deserialize, Serialize};

/// Argument store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Report values rejected by an options allow-list at `warn` level
    /// instead of `debug`.
    pub warn_on_invalid_options: bool,

    /// Drop holes that fall past the end of the existing array during a
    /// sparse merge. When off, they are filled with `Null`.
    pub compact_sparse_holes: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            warn_on_invalid_options: false,
            compact_sparse_holes: true,
        }
    }
}

/// Builder for [`ArgsStore`].
///
/// # Example
///
/// ```
/// use storyargs_primitives::ArgsStore;
///
/// let store = ArgsStore::builder()
///     .warn_on_invalid_options(true)
///     .build();
/// assert!(store.config().warn_on_invalid_options);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    config: StoreConfig,
}

impl StoreBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Report options allow-list rejections at `warn` level.
    pub fn warn_on_invalid_options(mut self, enabled: bool) -> Self {
        self.config.warn_on_invalid_options = enabled;
        self
    }

    /// Compact (default) or `Null`-fill holes past the end of an array.
    pub fn compact_sparse_holes(mut self, enabled: bool) -> Self {
        self.config.compact_sparse_holes = enabled;
        self
    }

    /// Build the store.
    pub fn build(self) -> ArgsStore {
        ArgsStore::with_config(self.config)
    }
}
