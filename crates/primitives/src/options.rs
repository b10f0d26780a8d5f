//! Options allow-list validation
//!
//! A descriptor may restrict an argument to a fixed set of values. A value
//! outside the set drops its whole key: the current value stays as it is.

use crate::config::StoreConfig;
use storyargs_core::{ArgTypes, PersistedArgs, PersistedValue, StoryId, Value};
use tracing::{debug, warn};

/// Keep only the arguments whose values are permitted by their options.
///
/// Arguments without a descriptor or without an allow-list pass through.
pub fn validate_options(
    story_id: &StoryId,
    args: PersistedArgs,
    arg_types: &ArgTypes,
    config: &StoreConfig,
) -> PersistedArgs {
    args.into_iter()
        .filter(|(name, value)| {
            let Some(options) = arg_types.get(name).and_then(|t| t.options.as_deref()) else {
                return true;
            };
            if is_permitted(value, options) {
                return true;
            }
            if config.warn_on_invalid_options {
                warn!(
                    story = %story_id,
                    arg = %name,
                    options = ?options,
                    "received illegal value for arg; ignoring it"
                );
            } else {
                debug!(story = %story_id, arg = %name, "dropping arg outside its options");
            }
            false
        })
        .collect()
}

/// A scalar must be one of `options`; an array is permitted when every
/// supplied element is. Objects are never members of an allow-list.
pub fn is_permitted(value: &PersistedValue, options: &[Value]) -> bool {
    match value {
        PersistedValue::Scalar(v) => options.contains(v),
        PersistedValue::Array(items) => items.iter().flatten().all(|item| match item {
            PersistedValue::Scalar(v) => options.contains(v),
            _ => false,
        }),
        PersistedValue::Object(_) => false,
    }
}
