//! # storyargs
//!
//! In-memory argument store for stories: named units of UI configuration.
//!
//! For every story the store keeps the initial arguments declared by the
//! story's implementation and the current arguments presented to readers.
//! It reconciles the current set against three kinds of input:
//!
//! 1. **User updates** - shallow, per-key replacement
//! 2. **Persisted state** - untrusted values coerced to declared types,
//!    filtered by options allow-lists and structurally merged
//! 3. **Regenerated defaults** - new initial arguments adopted for every
//!    argument the user has not changed
//!
//! ## Quick Start
//!
//! ```
//! use storyargs::prelude::*;
//!
//! let mut store = ArgsStore::new();
//! let previous = Story::new("button--primary")
//!     .with_initial_args(args_from_json(json!({"label": "Button", "size": "md"}))?);
//! store.set_initial("button--primary", &previous.initial_args);
//!
//! // The user edits one argument
//! store.update("button--primary", &args_from_json(json!({"label": "Buy"}))?)?;
//!
//! // The implementation changes its defaults
//! let next = Story::new("button--primary")
//!     .with_initial_args(args_from_json(json!({"label": "Button", "size": "lg"}))?);
//! store.reset_on_implementation_change(&next, &previous)?;
//!
//! let args = store.get("button--primary")?;
//! assert_eq!(args["label"], Value::from("Buy"));
//! assert_eq!(args["size"], Value::from("lg"));
//! # Ok::<(), storyargs::Error>(())
//! ```
//!
//! ## Sharing
//!
//! [`ArgsStore`] has no internal locking. Use [`SharedArgsStore`] to share
//! one store between threads.

#![warn(missing_docs)]

mod error;
mod shared;
mod types;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use shared::SharedArgsStore;
pub use storyargs_primitives::{ArgsStore, StoreBuilder};

// Re-export reconciliation helpers
pub use storyargs_primitives::{coerce, combine, delta, options};

// Re-export types
pub use types::*;
