//! Argument store primitive for storyargs
//!
//! [`ArgsStore`] tracks, per story, the declared initial arguments and the
//! live current arguments, and reconciles the current set against user
//! updates, persisted state and regenerated defaults.
//!
//! The reconciliation helpers are public so hosts can run them on their
//! own data:
//! - [`coerce`]: persisted values to declared shapes
//! - [`options`]: allow-list filtering
//! - [`combine`]: structural merge with sparse arrays
//! - [`delta`]: user edits relative to declared defaults

#![warn(missing_docs)]

pub mod args_store;
pub mod coerce;
pub mod combine;
pub mod config;
pub mod delta;
pub mod options;

pub use args_store::ArgsStore;
pub use config::{StoreBuilder, StoreConfig};
pub use delta::ArgDelta;
