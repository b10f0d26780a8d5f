//! Structural merge of partial values onto current values
//!
//! ## Semantics
//!
//! - object onto object: keys present in the update are merged
//!   recursively, all other existing keys are kept
//! - array onto array: supplied positions are merged, holes keep the
//!   existing element, the result is never shorter than the existing array
//! - anything else: the update replaces the existing value
//!
//! Holes that land past the end of the existing array have nothing to
//! keep; they are compacted away (or filled with `Null` when
//! [`StoreConfig::compact_sparse_holes`] is off). A value with nothing
//! underneath it is taken outright: its holes become `Null` so every
//! supplied element stays at its index.

use crate::config::StoreConfig;
use storyargs_core::{PersistedValue, Value};

/// Merge `update` onto `existing`, producing the new dense value.
pub fn combine(existing: Option<&Value>, update: &PersistedValue, config: &StoreConfig) -> Value {
    match (existing, update) {
        (Some(Value::Object(current)), PersistedValue::Object(patch)) => {
            let mut merged = current.clone();
            for (key, patch_value) in patch {
                let value = combine(current.get(key), patch_value, config);
                merged.insert(key.clone(), value);
            }
            Value::Object(merged)
        }
        (Some(Value::Array(current)), PersistedValue::Array(patch)) => {
            let len = current.len().max(patch.len());
            let mut merged = Vec::with_capacity(len);
            for index in 0..len {
                let existing_item = current.get(index);
                match (existing_item, patch.get(index).and_then(Option::as_ref)) {
                    (_, Some(item)) => merged.push(combine(existing_item, item, config)),
                    (Some(kept), None) => merged.push(kept.clone()),
                    (None, None) => {
                        if !config.compact_sparse_holes {
                            merged.push(Value::Null);
                        }
                    }
                }
            }
            Value::Array(merged)
        }
        (_, update) => materialize(update),
    }
}

/// Dense form of a value with nothing underneath it. Positions are kept.
fn materialize(update: &PersistedValue) -> Value {
    match update {
        PersistedValue::Scalar(v) => v.clone(),
        PersistedValue::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), materialize(v)))
                .collect(),
        ),
        PersistedValue::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| item.as_ref().map_or(Value::Null, materialize))
                .collect(),
        ),
    }
}
