//! User deltas against declared defaults
//!
//! When an implementation regenerates its initial arguments, the store
//! keeps what the user changed and takes everything else from the new
//! defaults. "Changed" is judged against the previous declared defaults,
//! key by key, with structural equality. A key missing on one side and
//! present on the other counts as changed.

use storyargs_core::{ArgSet, Value};
use tracing::trace;

/// Changed argument name -> its current value (`None` if the user removed it)
pub type ArgDelta = std::collections::BTreeMap<String, Option<Value>>;

/// Classify every key of `current` and `previous_initial`, returning the
/// changed ones.
pub fn diff_args(previous_initial: &ArgSet, current: &ArgSet) -> ArgDelta {
    let mut delta = ArgDelta::new();
    let names = current.keys().chain(previous_initial.keys());
    for name in names {
        if delta.contains_key(name) {
            continue;
        }
        let now = current.get(name);
        let before = previous_initial.get(name);
        if now != before {
            trace!(arg = %name, "arg changed since last defaults");
            delta.insert(name.clone(), now.cloned());
        }
    }
    delta
}

/// Lay `delta` over a full copy of `new_initial`.
pub fn apply_delta(new_initial: &ArgSet, delta: &ArgDelta) -> ArgSet {
    let mut result = new_initial.clone();
    for (name, value) in delta {
        match value {
            Some(v) => {
                result.insert(name.clone(), v.clone());
            }
            None => {
                result.remove(name);
            }
        }
    }
    result
}
